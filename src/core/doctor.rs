use serde::{Deserialize, Serialize};

/// Directory entry for a practitioner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub city: String,

    /// Years in practice
    pub experience: u32,

    /// Average rating (0.0 - 5.0)
    pub rating: f64,

    pub hospital: String,
    pub phone: String,
    pub email: String,
}

impl Doctor {
    /// Whole stars to display for the rating
    pub fn stars(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).floor() as u8
    }

    /// Get display string for listings
    pub fn display(&self) -> String {
        format!(
            "{} - {} ({} yrs, {:.1}★) @ {}, {}",
            self.name, self.specialization, self.experience, self.rating, self.hospital, self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;

    #[test]
    fn test_stars_and_display() {
        let catalog = Catalog::builtin();
        let doctor = &catalog.doctors[0];
        assert_eq!(doctor.stars(), 4);
        assert_eq!(
            doctor.display(),
            "Dr. Sarah Johnson - General Practice (12 yrs, 4.8★) @ NYC General Hospital, New York"
        );
    }
}
