pub mod employee_repo;

pub use employee_repo::EmployeeRepo;
