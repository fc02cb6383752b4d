pub mod automotor_dto;
