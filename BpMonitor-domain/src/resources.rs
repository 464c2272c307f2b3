// Static text shown alongside measurements

/// Rotating health tips; never empty
pub const HEALTH_TIPS: [&str; 8] = [
    "Stay hydrated! Aim for 8 glasses of water a day.",
    "Reduce salt intake in your diet.",
    "Exercise regularly - even a 30-minute walk can help.",
    "Manage stress through deep breathing or meditation.",
    "Eat more fruits and vegetables, especially those locally grown in Ghana.",
    "Limit alcohol consumption and avoid smoking.",
    "Take your medication as prescribed by your healthcare provider.",
    "Get adequate sleep - aim for 7-9 hours per night.",
];

/// A named local health resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalResource {
    pub name: &'static str,
    pub info: &'static str,
}

pub const LOCAL_RESOURCES: [LocalResource; 5] = [
    LocalResource {
        name: "Ghana Health Service",
        info: "Visit https://www.ghanahealthservice.org/ for official health information",
    },
    LocalResource {
        name: "Telemedicine Services",
        info: "Check with your local health center for available telemedicine options",
    },
    LocalResource {
        name: "Community Health Workers",
        info: "Contact your local CHPS compound for support",
    },
    LocalResource {
        name: "Healthy Eating",
        info: "Visit your local market for fresh, locally grown produce",
    },
    LocalResource {
        name: "Exercise Groups",
        info: "Join community exercise groups in your area for support and motivation",
    },
];

/// Message returned by the telemedicine stub
pub const PROVIDER_STUB_MESSAGE: &str = "Connecting you with a healthcare provider... \
(This would initiate a telemedicine consultation in a real app)";
