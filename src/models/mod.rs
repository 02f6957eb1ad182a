pub mod booking;
pub mod content;

pub use booking::{BookingFields, BookingRecord};
pub use content::{
    BookingContent, FooterContent, GalleryItem, HeroContent, PartialSiteContent, ServiceItem,
    SiteContent,
};
