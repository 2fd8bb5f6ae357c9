//! Ordered-collection manager: add/edit/move/delete over collections that
//! carry an explicit integer position. Positions are kept unique and
//! contiguous after a completed mutation, but readers never depend on
//! contiguity; display order is re-derived from a stable sort on every load.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use db::models::{
    footer_link::FooterLink, nav_item::NavItem, process_step::ProcessStep,
    service_card::ServiceCard, specialized_area::SpecializedArea,
};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OrderingError {
    #[error("{0}")]
    Validation(String),
    #[error("item not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The slice of an ordered row the manager needs to see.
pub trait Ranked {
    fn id(&self) -> Uuid;
    fn position(&self) -> i64;
    fn created_at(&self) -> DateTime<Utc>;
}

/// Persistence seam for one ordered collection. Implemented per entity so the
/// move/delete logic lives in exactly one place.
#[async_trait]
pub trait OrderedStore: Send + Sync {
    type Item: Ranked + Send + Sync;

    async fn list(&self) -> Result<Vec<Self::Item>, sqlx::Error>;
    async fn set_position(&self, id: Uuid, position: i64) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error>;
}

/// Stable display order: position first, creation time as the tiebreak. This
/// is what makes temporary gaps or duplicates harmless.
pub fn sort_by_rank<T: Ranked>(items: &mut [T]) {
    items.sort_by(|a, b| {
        a.position()
            .cmp(&b.position())
            .then_with(|| a.created_at().cmp(&b.created_at()))
    });
}

/// Pure renumbering: assign 0..N-1 by current rank. Returns (id, position)
/// pairs so callers can persist only the rows that changed.
pub fn normalize_positions<T: Ranked>(items: &[T]) -> Vec<(Uuid, i64)> {
    let mut refs: Vec<&T> = items.iter().collect();
    refs.sort_by(|a, b| {
        a.position()
            .cmp(&b.position())
            .then_with(|| a.created_at().cmp(&b.created_at()))
    });
    refs.iter()
        .enumerate()
        .map(|(rank, item)| (item.id(), rank as i64))
        .collect()
}

/// Position for a newly added item: max + 1, or 0 for an empty collection.
pub async fn next_position<S: OrderedStore>(store: &S) -> Result<i64, OrderingError> {
    let items = store.list().await?;
    Ok(items
        .iter()
        .map(Ranked::position)
        .max()
        .map_or(0, |max| max + 1))
}

pub async fn list_ordered<S: OrderedStore>(store: &S) -> Result<Vec<S::Item>, OrderingError> {
    let mut items = store.list().await?;
    sort_by_rank(&mut items);
    Ok(items)
}

pub async fn move_up<S: OrderedStore>(store: &S, id: Uuid) -> Result<(), OrderingError> {
    shift(store, id, Direction::Up).await
}

pub async fn move_down<S: OrderedStore>(store: &S, id: Uuid) -> Result<(), OrderingError> {
    shift(store, id, Direction::Down).await
}

enum Direction {
    Up,
    Down,
}

async fn shift<S: OrderedStore>(
    store: &S,
    id: Uuid,
    direction: Direction,
) -> Result<(), OrderingError> {
    let items = list_ordered(store).await?;
    let idx = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or(OrderingError::NotFound)?;

    // Already at the boundary: a no-op, not an error.
    let neighbor_idx = match direction {
        Direction::Up if idx == 0 => return Ok(()),
        Direction::Down if idx + 1 == items.len() => return Ok(()),
        Direction::Up => idx - 1,
        Direction::Down => idx + 1,
    };

    let item = &items[idx];
    let neighbor = &items[neighbor_idx];

    // Two sequential updates, no transaction. If the second fails the list is
    // temporarily inconsistent; callers reload the authoritative list instead
    // of patching local state, and the rank sort keeps display order sane.
    store.set_position(item.id(), neighbor.position()).await?;
    if let Err(e) = store.set_position(neighbor.id(), item.position()).await {
        warn!(
            id = %neighbor.id(),
            error = %e,
            "second position update failed, collection left non-contiguous until reload"
        );
        return Err(e.into());
    }
    Ok(())
}

/// Delete one item, then renumber the survivors back to 0..N-1. Renumbering is
/// a best-effort sequence of independent updates; a failure part-way leaves a
/// gap that the rank sort tolerates and the next mutation heals.
pub async fn delete<S: OrderedStore>(store: &S, id: Uuid) -> Result<(), OrderingError> {
    let items = list_ordered(store).await?;
    if !items.iter().any(|item| item.id() == id) {
        return Err(OrderingError::NotFound);
    }
    if store.delete(id).await? == 0 {
        return Err(OrderingError::NotFound);
    }

    let remaining: Vec<&S::Item> = items.iter().filter(|item| item.id() != id).collect();
    for (item_id, position) in normalize_positions(&remaining) {
        let current = remaining
            .iter()
            .find(|item| item.id() == item_id)
            .map(|item| item.position());
        if current == Some(position) {
            continue;
        }
        if let Err(e) = store.set_position(item_id, position).await {
            warn!(
                id = %item_id,
                error = %e,
                "renumbering after delete failed part-way, display order self-heals on reload"
            );
            return Err(e.into());
        }
    }
    Ok(())
}

impl<T: Ranked> Ranked for &T {
    fn id(&self) -> Uuid {
        (**self).id()
    }
    fn position(&self) -> i64 {
        (**self).position()
    }
    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }
}

macro_rules! ranked_impl {
    ($ty:ty) => {
        impl Ranked for $ty {
            fn id(&self) -> Uuid {
                self.id
            }
            fn position(&self) -> i64 {
                self.position
            }
            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }
        }
    };
}

ranked_impl!(NavItem);
ranked_impl!(ProcessStep);
ranked_impl!(SpecializedArea);
ranked_impl!(FooterLink);
ranked_impl!(ServiceCard);

macro_rules! ordered_store {
    ($store:ident, $item:ty) => {
        pub struct $store {
            pub pool: SqlitePool,
        }

        #[async_trait]
        impl OrderedStore for $store {
            type Item = $item;

            async fn list(&self) -> Result<Vec<$item>, sqlx::Error> {
                <$item>::list(&self.pool).await
            }

            async fn set_position(&self, id: Uuid, position: i64) -> Result<u64, sqlx::Error> {
                <$item>::set_position(&self.pool, id, position).await
            }

            async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
                <$item>::delete(&self.pool, id).await
            }
        }
    };
}

ordered_store!(NavItemStore, NavItem);
ordered_store!(ProcessStepStore, ProcessStep);
ordered_store!(SpecializedAreaStore, SpecializedArea);
ordered_store!(FooterLinkStore, FooterLink);
ordered_store!(ServiceCardStore, ServiceCard);

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeDelta;

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeItem {
        id: Uuid,
        title: String,
        position: i64,
        created_at: DateTime<Utc>,
    }

    impl Ranked for FakeItem {
        fn id(&self) -> Uuid {
            self.id
        }
        fn position(&self) -> i64 {
            self.position
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    #[derive(Default)]
    struct FakeStore {
        items: Mutex<Vec<FakeItem>>,
    }

    impl FakeStore {
        fn seed(titles: &[&str], base: i64) -> Self {
            let start = Utc::now();
            let items = titles
                .iter()
                .enumerate()
                .map(|(i, title)| FakeItem {
                    id: Uuid::new_v4(),
                    title: title.to_string(),
                    position: base + i as i64,
                    created_at: start + TimeDelta::seconds(i as i64),
                })
                .collect();
            Self {
                items: Mutex::new(items),
            }
        }

        fn id_of(&self, title: &str) -> Uuid {
            self.items
                .lock()
                .unwrap()
                .iter()
                .find(|item| item.title == title)
                .map(|item| item.id)
                .unwrap()
        }

        fn snapshot(&self) -> Vec<(String, i64)> {
            let mut items = self.items.lock().unwrap().clone();
            sort_by_rank(&mut items);
            items
                .into_iter()
                .map(|item| (item.title, item.position))
                .collect()
        }
    }

    #[async_trait]
    impl OrderedStore for FakeStore {
        type Item = FakeItem;

        async fn list(&self) -> Result<Vec<FakeItem>, sqlx::Error> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn set_position(&self, id: Uuid, position: i64) -> Result<u64, sqlx::Error> {
            let mut items = self.items.lock().unwrap();
            match items.iter_mut().find(|item| item.id == id) {
                Some(item) => {
                    item.position = position;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|item| item.id != id);
            Ok((before - items.len()) as u64)
        }
    }

    #[tokio::test]
    async fn move_down_swaps_with_next_item() {
        let store = FakeStore::seed(&["Home", "About", "Services"], 1);
        move_down(&store, store.id_of("Home")).await.unwrap();
        assert_eq!(
            store.snapshot(),
            vec![
                ("About".to_string(), 1),
                ("Home".to_string(), 2),
                ("Services".to_string(), 3),
            ]
        );
    }

    #[tokio::test]
    async fn move_up_on_first_and_move_down_on_last_are_noops() {
        let store = FakeStore::seed(&["Home", "About", "Services"], 0);
        let before = store.snapshot();
        move_up(&store, store.id_of("Home")).await.unwrap();
        move_down(&store, store.id_of("Services")).await.unwrap();
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn delete_closes_the_gap_and_preserves_relative_order() {
        let store = FakeStore::seed(&["One", "Two", "Three", "Four"], 1);
        delete(&store, store.id_of("Two")).await.unwrap();
        assert_eq!(
            store.snapshot(),
            vec![
                ("One".to_string(), 0),
                ("Three".to_string(), 1),
                ("Four".to_string(), 2),
            ]
        );
    }

    #[tokio::test]
    async fn move_on_unknown_id_is_not_found() {
        let store = FakeStore::seed(&["Home"], 0);
        let err = move_up(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, OrderingError::NotFound));
    }

    #[tokio::test]
    async fn next_position_is_max_plus_one_or_zero() {
        let empty = FakeStore::default();
        assert_eq!(next_position(&empty).await.unwrap(), 0);

        let store = FakeStore::seed(&["A", "B"], 5);
        assert_eq!(next_position(&store).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn listing_tolerates_gaps_and_writes_nothing() {
        let store = FakeStore::seed(&["A", "B", "C"], 0);
        store.set_position(store.id_of("B"), 5).await.unwrap();
        store.set_position(store.id_of("C"), 9).await.unwrap();

        let titles: Vec<String> = list_ordered(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);

        // The gapped positions are still in the store untouched.
        assert_eq!(
            store.snapshot(),
            vec![
                ("A".to_string(), 0),
                ("B".to_string(), 5),
                ("C".to_string(), 9),
            ]
        );
    }

    #[test]
    fn normalize_reassigns_by_rank_with_created_at_tiebreak() {
        let start = Utc::now();
        let items = vec![
            FakeItem {
                id: Uuid::new_v4(),
                title: "late".into(),
                position: 7,
                created_at: start + TimeDelta::seconds(2),
            },
            FakeItem {
                id: Uuid::new_v4(),
                title: "dup-old".into(),
                position: 3,
                created_at: start,
            },
            FakeItem {
                id: Uuid::new_v4(),
                title: "dup-new".into(),
                position: 3,
                created_at: start + TimeDelta::seconds(1),
            },
        ];
        let normalized = normalize_positions(&items);
        assert_eq!(normalized[0], (items[1].id, 0));
        assert_eq!(normalized[1], (items[2].id, 1));
        assert_eq!(normalized[2], (items[0].id, 2));
    }
}
