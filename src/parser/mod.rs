mod crack;
mod scan;
mod state;

pub use crack::crack;
pub use scan::scan;
pub use state::State;
