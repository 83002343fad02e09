pub mod details_viewmodel;

pub use details_viewmodel::DetailsViewModel;
