pub const PROJECT_NAME: &str = "varbuddy";

pub mod editor;
pub mod error;
pub mod options;
pub mod property;
pub mod reporter;
pub mod scanner;
pub mod session;
pub mod settings;
pub mod view;
