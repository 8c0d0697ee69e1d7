//! Client-side routing: the route table and the navigation guard.

pub mod guard;
pub mod routes;
