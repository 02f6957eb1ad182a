use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub name: String,
    pub price: String,
    pub desc: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    pub map_url: String,
    pub address: String,
    pub instagram: String,
    pub tiktok: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingContent {
    pub phone_owner: String,
    pub open_hours: String,
    pub open_note: String,
    pub times: Vec<String>,
}

/// Everything the marketing site renders. Stored as one JSON blob; partial
/// stored copies are merged over the built-in defaults section by section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub services: Vec<ServiceItem>,
    pub gallery: Vec<GalleryItem>,
    pub footer: FooterContent,
    pub booking: BookingContent,
}

/// A partial content object, as persisted by older versions of the admin
/// panel or hand-edited files. Missing sections fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialSiteContent {
    pub hero: Option<HeroContent>,
    pub services: Option<Vec<ServiceItem>>,
    pub gallery: Option<Vec<GalleryItem>>,
    pub footer: Option<FooterContent>,
    pub booking: Option<BookingContent>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero: HeroContent {
                title: "Kualitas Barbershop\nPremium.".to_string(),
                subtitle: "Tampil lebih percaya diri dengan potongan rambut terbaik. \
                           Kami memberikan detail dan gradasi yang presisi untuk gaya rambut Anda."
                    .to_string(),
                background: "https://images.unsplash.com/photo-1585747860715-2ba37e788b70"
                    .to_string(),
            },
            services: vec![
                ServiceItem {
                    name: "NO FADE".to_string(),
                    price: "15K".to_string(),
                    desc: "Potongan samping tipis dengan gradasi setengah".to_string(),
                    features: vec![
                        "Haircut Rapih".to_string(),
                        "Styling Pomade".to_string(),
                        "Konsultasi Gaya".to_string(),
                    ],
                    featured: false,
                },
                ServiceItem {
                    name: "FADE".to_string(),
                    price: "20K".to_string(),
                    desc: "Gradasi halus dari pendek nol ke panjang".to_string(),
                    features: vec![
                        "Detail Gradasi Premium".to_string(),
                        "Haircut Presisi".to_string(),
                        "Styling & Finishing".to_string(),
                    ],
                    featured: true,
                },
            ],
            gallery: vec![
                GalleryItem {
                    title: "MID FADE".to_string(),
                    src: "https://images.pexels.com/photos/1707828/pexels-photo-1707828.jpeg"
                        .to_string(),
                },
                GalleryItem {
                    title: "LOW FADE".to_string(),
                    src: "https://images.pexels.com/photos/3992878/pexels-photo-3992878.jpeg"
                        .to_string(),
                },
                GalleryItem {
                    title: "TAPER FADE".to_string(),
                    src: "https://images.pexels.com/photos/1707830/pexels-photo-1707830.jpeg"
                        .to_string(),
                },
                GalleryItem {
                    title: "SKIN FADE".to_string(),
                    src: "https://images.pexels.com/photos/3992881/pexels-photo-3992881.jpeg"
                        .to_string(),
                },
            ],
            footer: FooterContent {
                map_url: "https://www.google.com/maps/embed?pb=".to_string(),
                address: "Jl. Burung Gereja No.9, Arjowinangun".to_string(),
                instagram: "https://instagram.com/_beneficial.id".to_string(),
                tiktok: "#".to_string(),
            },
            booking: BookingContent {
                phone_owner: "#".to_string(),
                open_hours: "09:00 AM - Menyesuaikan".to_string(),
                open_note: "*Buka hanya hari Selasa*".to_string(),
                times: vec![
                    "09:00".to_string(),
                    "10:00".to_string(),
                    "11:00".to_string(),
                    "13:00".to_string(),
                    "14:00".to_string(),
                    "15:00".to_string(),
                    "16:00".to_string(),
                    "19:00".to_string(),
                    "20:00".to_string(),
                ],
            },
        }
    }
}

impl SiteContent {
    /// Merge a partially stored content object over the defaults. Empty
    /// `services`/`gallery` lists count as absent so a wiped list does not
    /// blank out the site.
    pub fn merged(partial: PartialSiteContent) -> Self {
        let defaults = Self::default();
        Self {
            hero: partial.hero.unwrap_or(defaults.hero),
            services: match partial.services {
                Some(services) if !services.is_empty() => services,
                _ => defaults.services,
            },
            gallery: match partial.gallery {
                Some(gallery) if !gallery.is_empty() => gallery,
                _ => defaults.gallery,
            },
            footer: partial.footer.unwrap_or(defaults.footer),
            booking: partial.booking.unwrap_or(defaults.booking),
        }
    }

    // Explicit per-section setters; the admin form updates whole sections,
    // never individual fields by path.

    pub fn set_hero(&mut self, hero: HeroContent) {
        self.hero = hero;
    }

    pub fn set_services(&mut self, services: Vec<ServiceItem>) {
        self.services = services;
    }

    pub fn set_gallery(&mut self, gallery: Vec<GalleryItem>) {
        self.gallery = gallery;
    }

    pub fn set_footer(&mut self, footer: FooterContent) {
        self.footer = footer;
    }

    pub fn set_booking(&mut self, booking: BookingContent) {
        self.booking = booking;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_empty_partial_yields_defaults() {
        let merged = SiteContent::merged(PartialSiteContent::default());
        assert_eq!(merged, SiteContent::default());
    }

    #[test]
    fn test_merged_keeps_stored_sections() {
        let partial = PartialSiteContent {
            hero: Some(HeroContent {
                title: "Custom".to_string(),
                subtitle: "Sub".to_string(),
                background: "bg.jpg".to_string(),
            }),
            ..Default::default()
        };
        let merged = SiteContent::merged(partial);
        assert_eq!(merged.hero.title, "Custom");
        assert_eq!(merged.footer, SiteContent::default().footer);
    }

    #[test]
    fn test_merged_empty_services_fall_back() {
        let partial = PartialSiteContent {
            services: Some(vec![]),
            ..Default::default()
        };
        let merged = SiteContent::merged(partial);
        assert!(!merged.services.is_empty());
    }

    #[test]
    fn test_section_setters() {
        let mut content = SiteContent::default();
        content.set_footer(FooterContent {
            map_url: "m".to_string(),
            address: "a".to_string(),
            instagram: "i".to_string(),
            tiktok: "t".to_string(),
        });
        assert_eq!(content.footer.address, "a");
    }
}
