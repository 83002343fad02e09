pub mod product_detail;

pub use product_detail::ProductDetail;
