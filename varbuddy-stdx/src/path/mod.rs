pub mod absolute;
pub mod expand;
pub mod is_hidden;

pub use absolute::Absolutize;
pub use expand::Expand;
pub use is_hidden::IsHidden;
