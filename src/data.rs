//! Static site content. Everything here is read-only and built at compile time.

pub mod case_studies;
pub mod posts;
pub mod profile;
pub mod projects;
pub mod skills;
