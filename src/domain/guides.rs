//! Static guide content: nutrition and exercise plans per risk level,
//! general health tips, emergency contacts.

use super::entities::RiskLabel;

pub struct FoodGuide {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tips: &'static [&'static str],
}

pub struct ExerciseTip {
    pub text: &'static str,
    pub detail: &'static str,
}

pub struct ExerciseGuide {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub duration: &'static str,
    pub intensity: &'static str,
    pub tips: &'static [ExerciseTip],
    pub precautions: &'static [&'static str],
}

pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
}

pub const FOOD_FOOTER: &str =
    "Always consult with your healthcare provider before making dietary changes";
pub const EXERCISE_FOOTER: &str =
    "Always consult your healthcare provider before starting any exercise program";

static LOW_FOOD: FoodGuide = FoodGuide {
    title: "Low Risk Nutrition Guide",
    description: "Optimal nutrition for healthy pregnancy maintenance",
    icon: "🥗",
    tips: &[
        "Continue your usual balanced diet with enhanced nutrients",
        "Include fresh fruits (3-4 servings), green vegetables (2-3 cups), and whole grains daily",
        "Stay hydrated (8-10 glasses) and take prenatal vitamins as prescribed",
        "Eat small frequent meals (5-6/day) to avoid heartburn and nausea",
        "Include lean proteins (eggs, chicken, tofu, legumes - 75-100g per meal)",
        "Avoid undercooked meats, unpasteurized dairy and raw sprouts",
        "Ensure calcium intake (1000mg/day) via dairy or fortified products",
        "Include omega-3 rich foods (walnuts, chia seeds, salmon)",
    ],
};

static MEDIUM_FOOD: FoodGuide = FoodGuide {
    title: "Moderate Risk Nutrition Plan",
    description: "Targeted diet for managing pregnancy concerns",
    icon: "🥑",
    tips: &[
        "Increase protein intake (80-110g/day) and calcium (1200mg/day)",
        "Eliminate caffeine and limit sugary drinks (<25g added sugar/day)",
        "Include iron-rich foods (spinach, lentils, dates) with vitamin C for absorption",
        "Avoid processed snacks and refined carbohydrates",
        "Hydrate well (2–3 liters daily) with electrolytes if needed",
        "Include healthy fats (nuts, seeds, avocados, olive oil)",
        "Monitor sodium intake (<2300mg/day) to manage blood pressure",
        "Consider smaller, more frequent meals to stabilize blood sugar",
    ],
};

static HIGH_FOOD: FoodGuide = FoodGuide {
    title: "High Risk Dietary Protocol",
    description: "Medically supervised nutrition plan",
    icon: "🏥",
    tips: &[
        "Follow physician-approved diet plan strictly",
        "Avoid raw foods, spicy items, and processed/junk food completely",
        "Nutrient-dense but easily digestible meals (6-8 small portions)",
        "Take doctor-prescribed supplements on schedule",
        "Use pregnancy diet tracker app for monitoring",
        "Eliminate high-mercury fish and unpasteurized products",
        "Discuss food allergies and intolerances with your doctor",
        "Maintain detailed food and symptom journal",
    ],
};

static LOW_EXERCISE: ExerciseGuide = ExerciseGuide {
    title: "Low Risk Exercise Plan",
    description: "Safe and beneficial activities for healthy pregnancy",
    icon: "🚶‍♀️",
    duration: "30-45 minutes daily",
    intensity: "Moderate",
    tips: &[
        ExerciseTip {
            text: "30 minutes walking daily (morning/evening when cooler)",
            detail: "Use supportive footwear, avoid uneven terrain",
        },
        ExerciseTip {
            text: "Prenatal yoga sessions (2-3 times weekly)",
            detail: "Focus on poses that improve flexibility and reduce back pain",
        },
        ExerciseTip {
            text: "Light stretching and breathing exercises daily",
            detail: "Especially beneficial before bedtime",
        },
        ExerciseTip {
            text: "Swimming or water aerobics (if doctor-approved)",
            detail: "Excellent low-impact full-body workout",
        },
        ExerciseTip {
            text: "Kegel exercises (3 sets of 10 daily)",
            detail: "Strengthens pelvic floor for labor and recovery",
        },
        ExerciseTip {
            text: "Take movement breaks every hour when sitting",
            detail: "Prevents blood clots and reduces swelling",
        },
        ExerciseTip {
            text: "Practice light squats and hip circles",
            detail: "Prepares body for labor, improves mobility",
        },
    ],
    precautions: &[
        "Stay hydrated (drink before, during, and after)",
        "Avoid exercises lying flat on back after 1st trimester",
        "Stop immediately if experiencing dizziness or pain",
    ],
};

static MEDIUM_EXERCISE: ExerciseGuide = ExerciseGuide {
    title: "Moderate Risk Activity Guide",
    description: "Gentle movements with precautions",
    icon: "🧘‍♀️",
    duration: "20-30 minutes",
    intensity: "Light",
    tips: &[
        ExerciseTip {
            text: "Limit workouts to 20 mins/day with breaks",
            detail: "Multiple short sessions may be better than one long one",
        },
        ExerciseTip {
            text: "Avoid high-impact activities completely",
            detail: "No jumping, running, or sudden movements",
        },
        ExerciseTip {
            text: "Gentle pilates and sitting stretches",
            detail: "Use props for support as needed",
        },
        ExerciseTip {
            text: "Use maternity support belts if needed",
            detail: "Especially for back or pelvic pain",
        },
        ExerciseTip {
            text: "Focus on posture and lower back strength",
            detail: "Wall angels and seated exercises recommended",
        },
        ExerciseTip {
            text: "Modify positions - avoid lying flat on back",
            detail: "Use side-lying or inclined positions instead",
        },
        ExerciseTip {
            text: "Exercise in climate-controlled spaces",
            detail: "Avoid overheating and maintain hydration",
        },
    ],
    precautions: &[
        "Monitor blood pressure before/after activity",
        "Have someone nearby when exercising",
        "Discontinue if experiencing contractions",
    ],
};

static HIGH_EXERCISE: ExerciseGuide = ExerciseGuide {
    title: "High Risk Activity Protocol",
    description: "Medically supervised movement plan",
    icon: "🛌",
    duration: "As prescribed",
    intensity: "Very Light",
    tips: &[
        ExerciseTip {
            text: "Only doctor-approved activities",
            detail: "Strictly follow medical recommendations",
        },
        ExerciseTip {
            text: "Focus on breathing techniques",
            detail: "Diaphragmatic breathing for relaxation",
        },
        ExerciseTip {
            text: "Bed rest modifications if prescribed",
            detail: "Ankle circles and gentle stretches in bed",
        },
        ExerciseTip {
            text: "Seated or supported leg movements",
            detail: "Only if permitted by healthcare provider",
        },
        ExerciseTip {
            text: "Guided meditation for mental wellness",
            detail: "Reduces stress without physical strain",
        },
        ExerciseTip {
            text: "Monitor baby movements carefully",
            detail: "Report any changes immediately",
        },
        ExerciseTip {
            text: "Prioritize complete rest periods",
            detail: "Balance minimal activity with adequate recovery",
        },
    ],
    precautions: &[
        "No exercise without explicit doctor approval",
        "Watch for warning signs like bleeding or swelling",
        "Keep emergency contacts readily available",
    ],
};

/// Pregnancy-care basics shown above the daily tips.
pub const PREGNANCY_CARE: &[&str] = &[
    "Maintain a balanced diet rich in vitamins and minerals.",
    "Stay hydrated and drink plenty of water throughout the day.",
    "Engage in safe and moderate exercise regularly, as recommended.",
    "Attend regular prenatal checkups with your healthcare provider.",
    "Get enough rest and manage stress with relaxation techniques.",
    "Avoid harmful substances such as alcohol, tobacco, and unprescribed drugs.",
];

pub const HEALTH_TIPS: &[&str] = &[
    "💧 Stay hydrated - Drink at least 8 glasses of water daily",
    "🍎 Eat balanced meals with fruits, vegetables, and whole grains",
    "🚶‍♀️ Engage in moderate exercise for 30 minutes daily",
    "😴 Get 7-9 hours of quality sleep each night",
    "🧘‍♀️ Practice stress-reduction techniques like deep breathing",
    "🚭 Avoid smoking and limit caffeine intake",
    "🩺 Attend all prenatal checkups as scheduled",
];

pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        name: "National Maternal Helpline",
        number: "1-800-XXX-XXXX",
    },
    EmergencyContact {
        name: "Local Emergency",
        number: "911",
    },
    EmergencyContact {
        name: "Your OB/GYN",
        number: "(XXX) XXX-XXXX",
    },
];

pub fn food_guide(level: RiskLabel) -> &'static FoodGuide {
    match level {
        RiskLabel::Low => &LOW_FOOD,
        RiskLabel::Medium => &MEDIUM_FOOD,
        RiskLabel::High => &HIGH_FOOD,
    }
}

pub fn exercise_guide(level: RiskLabel) -> &'static ExerciseGuide {
    match level {
        RiskLabel::Low => &LOW_EXERCISE,
        RiskLabel::Medium => &MEDIUM_EXERCISE,
        RiskLabel::High => &HIGH_EXERCISE,
    }
}
