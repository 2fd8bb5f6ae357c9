pub mod appointment;
pub mod blog_post;
pub mod company_info;
pub mod footer_link;
pub mod global_settings;
pub mod hero_section;
pub mod nav_item;
pub mod page_seo;
pub mod process_step;
pub mod seo_settings;
pub mod service_card;
pub mod site_project;
pub mod specialized_area;
pub mod testimonial;
pub mod time_slot;
