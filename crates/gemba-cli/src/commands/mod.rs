pub mod action;
pub mod agenda;
pub mod audit;
pub mod catalog;
pub mod dispatch;
pub mod finalize;
pub mod goal;
pub mod rebuild;
pub mod schedule;
pub mod score;
pub mod shared;
pub mod stats;
