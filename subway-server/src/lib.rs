//! Subway network server.
//!
//! Models subway lines as chains of sections between stations and answers
//! "what is the shortest way from this station to that one?" across every
//! line of the network.

pub mod config;
pub mod domain;
pub mod network;
pub mod path;
pub mod web;
