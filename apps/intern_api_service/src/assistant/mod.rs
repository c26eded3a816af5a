pub mod assistant_controller;
pub mod assistant_service;
