//! Text formats handed to the csound renderer

pub mod orchestra;
pub mod score;

pub use orchestra::Orchestra;
pub use score::score_text;
