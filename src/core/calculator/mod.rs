pub mod gpa;
