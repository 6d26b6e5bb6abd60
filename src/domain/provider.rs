use std::fmt;

/// The closed set of service categories offered on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    Electrician,
    Plumber,
    Mechanic,
    Technician,
    Barber,
    Freelancer,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::Electrician,
        ServiceCategory::Plumber,
        ServiceCategory::Mechanic,
        ServiceCategory::Technician,
        ServiceCategory::Barber,
        ServiceCategory::Freelancer,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::Electrician => "Electrician",
            ServiceCategory::Plumber => "Plumber",
            ServiceCategory::Mechanic => "Mechanic",
            ServiceCategory::Technician => "Technician",
            ServiceCategory::Barber => "Barber & Salon",
            ServiceCategory::Freelancer => "Freelancers",
        }
    }

    /// Skills a provider in this category can offer.
    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            ServiceCategory::Electrician => &[
                "Wiring Installation",
                "Circuit Repair",
                "Switch & Socket Fitting",
                "MCB Installation",
                "Ceiling Fan Installation",
                "LED Light Setup",
                "Inverter Installation",
                "Smart Home Setup",
            ],
            ServiceCategory::Plumber => &[
                "Pipe Fitting",
                "Leak Repair",
                "Toilet Installation",
                "Tap Repair",
                "Drain Cleaning",
                "Geyser Installation",
                "Kitchen Plumbing",
            ],
            ServiceCategory::Mechanic => &[
                "Engine Repair",
                "Brake Service",
                "Oil Change",
                "Tire Service",
                "Battery Replacement",
                "AC Repair",
                "Full Vehicle Service",
            ],
            ServiceCategory::Technician => &[
                "AC Installation",
                "AC Repair",
                "Refrigerator Repair",
                "Washing Machine Service",
                "TV Repair",
                "Laptop Repair",
                "CCTV Installation",
                "WiFi Setup",
            ],
            ServiceCategory::Barber => &[
                "Haircut",
                "Beard Styling",
                "Hair Coloring",
                "Facial",
                "Head Massage",
                "Hair Spa",
            ],
            ServiceCategory::Freelancer => &[
                "Photography",
                "Videography",
                "Graphic Design",
                "Web Development",
                "Content Writing",
                "Event Planning",
            ],
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A service-offering entity bookable by customers.
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub category: ServiceCategory,
    pub location: String,
    pub rating: f32,
    pub reviews: u32,
    /// Years of experience.
    pub experience: u32,
    pub skills: Vec<String>,
    pub price_range: String,
    pub available: bool,
    pub verified: bool,
    pub bio: String,
    pub completed_jobs: u32,
    pub response_time: String,
    pub avatar: String,
}
