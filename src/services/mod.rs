pub mod request_util;
pub mod entity_service;
pub mod resolver;
pub mod forms;
pub mod editor;
