pub mod models {
    pub mod input;
    pub mod output;
}
pub mod modules;
pub mod version;
