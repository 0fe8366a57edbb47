mod appointment_test;
mod middleware_test;
mod style_test;
