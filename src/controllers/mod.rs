pub mod automotor_controller;
