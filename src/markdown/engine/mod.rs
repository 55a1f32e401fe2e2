pub mod comrak;
