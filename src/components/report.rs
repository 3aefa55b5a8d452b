mod charts;
mod dial;
mod view;

pub use view::Report;
