pub mod comparison;
pub mod product;
pub mod question;
pub mod roi;
