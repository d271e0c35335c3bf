//! Loadplan Studio CLI library surface.

pub mod logging;
