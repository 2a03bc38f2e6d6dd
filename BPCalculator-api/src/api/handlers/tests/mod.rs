mod blood_pressure_test;
mod health_test;
