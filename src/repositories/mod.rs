pub mod automotor_repository;
