//! Wire contracts and client-side rules shared by the departmentalization console.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
