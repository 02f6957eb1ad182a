pub mod bookings;
pub mod slots;
pub mod whatsapp;
