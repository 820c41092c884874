mod app;
mod select;

pub use app::Serenata;
