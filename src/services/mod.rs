pub mod roster_service;
