//! Content for the conditions, approach and process sections.

/// A column in the "Conditions We Treat" grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionCategory {
    pub icon: String,
    pub heading: String,
    pub conditions: Vec<String>,
}

impl ConditionCategory {
    fn new(icon: &str, heading: &str, conditions: &[&str]) -> Self {
        Self {
            icon: icon.to_string(),
            heading: heading.to_string(),
            conditions: conditions.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn standard() -> Vec<Self> {
        vec![
            Self::new(
                "🧠",
                "Neurological",
                &[
                    "Stroke (CVA) Recovery",
                    "Parkinson's Disease",
                    "Multiple Sclerosis (MS)",
                    "Motor Neurone Disease",
                    "Brain & Spinal Cord Injury",
                    "Peripheral Neuropathy",
                    "Cerebral Palsy",
                ],
            ),
            Self::new(
                "🦴",
                "Musculoskeletal",
                &[
                    "Lower Back Pain",
                    "Neck Pain & Whiplash",
                    "Osteoarthritis",
                    "Rheumatoid Arthritis",
                    "Sports Injuries",
                    "Tendinopathies",
                    "Ligament Sprains",
                ],
            ),
            Self::new(
                "🏥",
                "Post-Surgical",
                &[
                    "Hip Replacement",
                    "Knee Replacement",
                    "Spinal Surgery",
                    "Shoulder Surgery",
                    "Fracture Rehabilitation",
                    "ACL Reconstruction",
                    "General Orthopaedic Surgery",
                ],
            ),
            Self::new(
                "⚖️",
                "Balance & Mobility",
                &[
                    "Recurrent Falls",
                    "Balance Disorders",
                    "Vestibular Dysfunction",
                    "Dizziness & Vertigo",
                    "Gait Abnormalities",
                    "Muscle Weakness",
                    "Deconditioning",
                ],
            ),
            Self::new(
                "🫁",
                "Respiratory",
                &[
                    "COPD Management",
                    "Post-COVID Recovery",
                    "Bronchiectasis",
                    "Cystic Fibrosis",
                    "Chronic Breathlessness",
                    "Pneumonia Recovery",
                    "Chest Infections",
                ],
            ),
            Self::new(
                "👴",
                "Elderly Care",
                &[
                    "Frailty Syndrome",
                    "Post-Hospital Discharge",
                    "Reduced Mobility",
                    "General Weakness",
                    "End of Life Care",
                    "Palliative Physiotherapy",
                    "Age-Related Decline",
                ],
            ),
        ]
    }
}

/// A card in the treatment approach section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproachCard {
    pub heading: String,
    pub intro: String,
    pub points: Vec<String>,
}

impl ApproachCard {
    fn new(heading: &str, intro: &str, points: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            intro: intro.to_string(),
            points: points.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn standard() -> Vec<Self> {
        vec![
            Self::new(
                "Comprehensive Assessment",
                "Every treatment begins with a thorough clinical assessment including:",
                &[
                    "Detailed medical history review",
                    "Functional movement analysis",
                    "Strength and flexibility testing",
                    "Balance and coordination evaluation",
                    "Pain assessment and management",
                    "Home environment safety review",
                ],
            ),
            Self::new(
                "Personalized Treatment Plans",
                "Tailored rehabilitation programmes designed specifically for you:",
                &[
                    "Goal-oriented therapy sessions",
                    "Progressive exercise programmes",
                    "Manual therapy techniques",
                    "Education and self-management",
                    "Equipment prescription if needed",
                    "Regular progress monitoring",
                ],
            ),
            Self::new(
                "Evidence-Based Practice",
                "Treatment grounded in the latest clinical research and best practices:",
                &[
                    "Current NICE guidelines followed",
                    "Neuroplasticity principles applied",
                    "Task-specific training methods",
                    "Functional rehabilitation focus",
                    "Outcome measure tracking",
                    "Continuous professional development",
                ],
            ),
            Self::new(
                "Holistic Care",
                "Addressing all aspects of your health and wellbeing:",
                &[
                    "Physical and psychological support",
                    "Lifestyle and activity advice",
                    "Pain management strategies",
                    "Carer training and education",
                    "MDT communication and liaison",
                    "Long-term health promotion",
                ],
            ),
        ]
    }
}

/// A step in the "How It Works" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: u8,
    pub heading: String,
    pub text: String,
}

impl ProcessStep {
    pub fn standard() -> Vec<Self> {
        [
            ("Initial Contact", "Call, email, or use our contact form to discuss your needs and book a free consultation."),
            ("Assessment Visit", "Comprehensive 60-minute assessment in your home to evaluate your condition and goals."),
            ("Treatment Plan", "Personalized rehabilitation programme developed collaboratively with clear, measurable objectives."),
            ("Ongoing Care", "Regular treatment sessions with continuous monitoring, adjustment, and support."),
        ]
        .iter()
        .zip(1u8..)
        .map(|((heading, text), number)| Self {
            number,
            heading: heading.to_string(),
            text: text.to_string(),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_grid_shape() {
        let categories = ConditionCategory::standard();
        assert_eq!(categories.len(), 6);
        assert!(categories.iter().all(|c| c.conditions.len() == 7));
    }

    #[test]
    fn test_process_steps_are_numbered_from_one() {
        let steps = ProcessStep::standard();
        let numbers: Vec<u8> = steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, [1, 2, 3, 4]);
        assert_eq!(steps[1].heading, "Assessment Visit");
    }

    #[test]
    fn test_approach_cards() {
        let cards = ApproachCard::standard();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[3].heading, "Holistic Care");
    }
}
