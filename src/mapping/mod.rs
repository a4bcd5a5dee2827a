pub mod category;
pub mod equipment;
pub mod muscles;
pub mod text;
