use std::sync::Arc;

use chrono::NaiveDate;
use db::{
    DBService,
    models::{
        appointment::{AppointmentStatus, CreateAppointment},
        company_info::{CompanyInfo, UpdateCompanyInfo},
        global_settings::GlobalSettings,
        nav_item::{CreateNavItem, NavItem},
        time_slot::TimeSlot,
    },
};
use services::services::{
    appointments::{AppointmentError, AppointmentService},
    content_resolver::ContentResolver,
    ordering::{self, NavItemStore},
    seed,
    settings::{SettingsError, SettingsService, Upload},
    storage::FileStorage,
};
use sqlx::SqlitePool;
use uuid::Uuid;

async fn pool() -> SqlitePool {
    DBService::new_in_memory().await.unwrap().pool
}

fn settings_service(pool: &SqlitePool) -> (SettingsService, Arc<FileStorage>) {
    let storage = Arc::new(FileStorage::new(
        std::env::temp_dir().join(format!("suncore-test-{}", Uuid::new_v4())),
    ));
    let resolver = Arc::new(ContentResolver::new(pool.clone()));
    (
        SettingsService::new(pool.clone(), storage.clone(), resolver),
        storage,
    )
}

fn company(name: &str) -> UpdateCompanyInfo {
    UpdateCompanyInfo {
        name: name.to_string(),
        about: None,
        phone: None,
        email: None,
        address: None,
        founded_year: None,
        logo_file_id: None,
        certifications: None,
    }
}

async fn seed_nav(pool: &SqlitePool, titles: &[&str]) -> Vec<NavItem> {
    let mut items = Vec::new();
    for (position, title) in titles.iter().enumerate() {
        items.push(
            NavItem::create(
                pool,
                &CreateNavItem {
                    title: title.to_string(),
                    path: format!("/{}", title.to_lowercase()),
                },
                Uuid::new_v4(),
                position as i64,
            )
            .await
            .unwrap(),
        );
    }
    items
}

async fn nav_titles(store: &NavItemStore) -> Vec<String> {
    ordering::list_ordered(store)
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.title)
        .collect()
}

#[tokio::test]
async fn move_and_delete_keep_navigation_ordered_in_the_database() {
    let pool = pool().await;
    let items = seed_nav(&pool, &["Home", "About", "Services", "Contact"]).await;
    let store = NavItemStore { pool: pool.clone() };

    ordering::move_down(&store, items[0].id).await.unwrap();
    assert_eq!(
        nav_titles(&store).await,
        vec!["About", "Home", "Services", "Contact"]
    );

    ordering::delete(&store, items[0].id).await.unwrap();
    assert_eq!(nav_titles(&store).await, vec!["About", "Services", "Contact"]);

    // Positions are contiguous again after the delete.
    let positions: Vec<i64> = ordering::list_ordered(&store)
        .await
        .unwrap()
        .iter()
        .map(|item| item.position)
        .collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[tokio::test]
async fn invalid_slot_save_writes_nothing() {
    let pool = pool().await;
    let (service, _storage) = settings_service(&pool);

    let err = service.save_company_info(company("  "), None).await.unwrap_err();
    assert!(matches!(err, SettingsError::Validation(_)));
    assert!(GlobalSettings::load(&pool).await.unwrap().is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM company_info")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn logo_upload_is_stored_and_merged_into_the_slot() {
    let pool = pool().await;
    let (service, storage) = settings_service(&pool);

    let saved = service
        .save_company_info(
            company("Solar Shine"),
            Some(Upload {
                filename: "logo.png".to_string(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }),
        )
        .await
        .unwrap();

    let file_id = saved.logo_file_id.expect("logo id merged into saved slot");
    let bytes = storage.read(&file_id).await.unwrap().unwrap();
    assert_eq!(bytes, vec![0x89, 0x50, 0x4e, 0x47]);
}

#[tokio::test]
async fn failed_logo_upload_aborts_the_save_and_keeps_prior_state() {
    let pool = pool().await;
    let (service, _storage) = settings_service(&pool);

    let saved = service
        .save_company_info(
            company("Solar Shine"),
            Some(Upload {
                filename: "logo.png".to_string(),
                bytes: vec![1, 2, 3],
            }),
        )
        .await
        .unwrap();
    let original_logo = saved.logo_file_id.expect("first save stored a logo");

    // A storage root under a file cannot be created, so the upload fails.
    let broken = SettingsService::new(
        pool.clone(),
        Arc::new(FileStorage::new("/dev/null/uploads")),
        Arc::new(ContentResolver::new(pool.clone())),
    );
    let err = broken
        .save_company_info(
            company("Renamed Installer"),
            Some(Upload {
                filename: "new-logo.png".to_string(),
                bytes: vec![4, 5, 6],
            }),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SettingsError::Upload(_)));

    // The whole save aborted: name and logo reference are untouched.
    let current = CompanyInfo::load(&pool).await.unwrap().unwrap();
    assert_eq!(current.name, "Solar Shine");
    assert_eq!(current.logo_file_id.as_deref(), Some(original_logo.as_str()));
}

fn booking(date: NaiveDate, slot: Option<Uuid>) -> CreateAppointment {
    CreateAppointment {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+1 555 0101".to_string(),
        service: "Residential solar".to_string(),
        requested_date: date,
        time_slot_id: slot,
        message: Some("South-facing roof".to_string()),
    }
}

#[tokio::test]
async fn booking_marks_the_slot_and_rejects_a_second_booking() {
    let pool = pool().await;
    let service = AppointmentService::new(pool.clone());
    let date = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
    let slot = TimeSlot::create(&pool, date, "09:00 - 11:00", Uuid::new_v4())
        .await
        .unwrap();

    let appointment = service.book(booking(date, Some(slot.id))).await.unwrap();
    assert_eq!(appointment.status, AppointmentStatus::Pending);

    let slots = service.slots_for_date(date).await.unwrap();
    assert!(slots[0].booked);

    let err = service.book(booking(date, Some(slot.id))).await.unwrap_err();
    assert!(matches!(err, AppointmentError::Validation(_)));
}

#[tokio::test]
async fn booking_an_unknown_slot_is_rejected_before_any_write() {
    let pool = pool().await;
    let service = AppointmentService::new(pool.clone());
    let date = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();

    let err = service.book(booking(date, Some(Uuid::new_v4()))).await.unwrap_err();
    assert!(matches!(err, AppointmentError::SlotNotFound));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM appointments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn seeding_runs_once_and_is_idempotent() {
    let pool = pool().await;
    assert!(seed::seed_if_empty(&pool).await.unwrap());
    assert!(!seed::seed_if_empty(&pool).await.unwrap());

    let store = NavItemStore { pool: pool.clone() };
    let titles = nav_titles(&store).await;
    assert_eq!(titles.first().map(String::as_str), Some("Home"));
    assert_eq!(titles.len(), 6);
}

#[tokio::test]
async fn status_updates_on_unknown_appointment_are_not_found() {
    let service = AppointmentService::new(pool().await);
    let err = service
        .set_status(Uuid::new_v4(), AppointmentStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, AppointmentError::NotFound));
}
