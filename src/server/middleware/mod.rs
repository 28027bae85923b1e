//! Request middleware.
//!
//! `auth` holds the bearer token layer applied to every route.

pub mod auth;

#[cfg(test)]
mod test;
