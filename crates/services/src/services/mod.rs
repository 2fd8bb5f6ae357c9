pub mod appointments;
pub mod contact;
pub mod content;
pub mod content_resolver;
pub mod head;
pub mod ordering;
pub mod seed;
pub mod settings;
pub mod storage;
pub mod validate;
