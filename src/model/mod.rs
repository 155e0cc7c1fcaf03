pub mod classification;
pub mod fallback;
pub mod features;
pub mod profile;
pub mod similarity;
pub mod tree;
