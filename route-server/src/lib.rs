//! Station route planner server.
//!
//! A small service that answers: "how do I get from this station to that
//! one?" over a weighted transit network, minimising distance, time, a
//! blend of the two, or the number of stops, and reporting the fare.

pub mod config;
pub mod domain;
pub mod edges;
pub mod network;
pub mod planner;
pub mod web;
