pub mod catalogue;
pub mod db;
pub mod export;
pub mod filter;
pub mod i18n;
pub mod narrator;
pub mod navigation;
pub mod share;
pub mod state;
pub mod tour;
