//! Service catalog.

use std::sync::OnceLock;

use serde::Serialize;

/// Detail shown in the service modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    pub title: String,
    pub description: String,
    /// Ordered as displayed.
    pub conditions: Vec<String>,
    /// Ordered as displayed.
    pub treatments: Vec<String>,
}

impl ServiceDescriptor {
    fn new(title: &str, description: &str, conditions: &[&str], treatments: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            conditions: conditions.iter().map(|s| s.to_string()).collect(),
            treatments: treatments.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A card in the services grid together with its modal detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    /// Service identifier used for lookup and in `?service=` links.
    pub key: String,
    pub icon: String,
    /// Card heading; may be shorter than the descriptor title.
    pub card_title: String,
    pub summary: String,
    pub descriptor: ServiceDescriptor,
}

/// Immutable mapping from service key to service entry, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    entries: Vec<ServiceEntry>,
}

impl ServiceCatalog {
    /// Build a catalog. Later entries with a duplicate key are dropped.
    pub fn new(entries: Vec<ServiceEntry>) -> Self {
        let mut unique: Vec<ServiceEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !unique.iter().any(|e| e.key == entry.key) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// The practice's catalog, built on first use.
    pub fn standard() -> &'static ServiceCatalog {
        static CATALOG: OnceLock<ServiceCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| ServiceCatalog::new(standard_entries()))
    }

    /// Look up a service by key.
    pub fn get(&self, key: &str) -> Option<&ServiceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key → descriptor map as JSON, embedded in the page for the modal script.
    pub fn descriptors_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|e| {
                (
                    e.key.clone(),
                    serde_json::to_value(&e.descriptor).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

fn entry(key: &str, icon: &str, card_title: &str, summary: &str, descriptor: ServiceDescriptor) -> ServiceEntry {
    ServiceEntry {
        key: key.to_string(),
        icon: icon.to_string(),
        card_title: card_title.to_string(),
        summary: summary.to_string(),
        descriptor,
    }
}

fn standard_entries() -> Vec<ServiceEntry> {
    vec![
        entry(
            "neurological",
            "🧠",
            "Neurological Physiotherapy",
            "Specialist rehabilitation for neurological conditions including stroke, Parkinson's, MS, and brain injury. Focus on maximizing independence and quality of life.",
            ServiceDescriptor::new(
                "Neurological Physiotherapy",
                "Specialist neurological rehabilitation focusing on maximizing function, independence, and quality of life for patients with neurological conditions.",
                &[
                    "Stroke (CVA) - acute and chronic recovery",
                    "Parkinson's Disease - movement and balance training",
                    "Multiple Sclerosis (MS) - fatigue management and mobility",
                    "Motor Neurone Disease (MND) - maintaining function and independence",
                    "Brain Injury - cognitive and physical rehabilitation",
                    "Spinal Cord Injury - functional training and adaptation",
                    "Peripheral Neuropathy - sensory retraining and gait work",
                ],
                &[
                    "Neuroplasticity-based rehabilitation",
                    "Task-specific training programmes",
                    "Balance and coordination exercises",
                    "Gait re-education and walking aids",
                    "Upper limb functional training",
                    "Spasticity management",
                    "Fatigue management strategies",
                ],
            ),
        ),
        entry(
            "geriatric",
            "👴",
            "Geriatric Rehabilitation",
            "Comprehensive care for older adults addressing frailty, osteoarthritis, reduced mobility, and post-hospital recovery. Evidence-based interventions to maintain independence.",
            ServiceDescriptor::new(
                "Geriatric Rehabilitation",
                "Comprehensive physiotherapy for older adults, promoting healthy aging, maintaining independence, and improving quality of life.",
                &[
                    "Frailty Syndrome - strength and endurance building",
                    "Osteoarthritis - pain management and joint mobility",
                    "Reduced Mobility - progressive exercise programmes",
                    "Deconditioning - post-hospital or illness recovery",
                    "Post-Hospital Discharge - safe transition home",
                    "General Age-Related Decline - preventative interventions",
                ],
                &[
                    "Progressive strength training",
                    "Functional mobility exercises",
                    "Balance and stability work",
                    "Joint mobilization techniques",
                    "Pain management strategies",
                    "Home safety assessments",
                    "Walking aid prescription and training",
                ],
            ),
        ),
        entry(
            "postOp",
            "🏥",
            "Post-operative Rehabilitation",
            "Structured recovery programmes following joint replacements, spinal surgery, and orthopaedic procedures. Optimizing healing and restoring function safely.",
            ServiceDescriptor::new(
                "Post-operative Rehabilitation",
                "Structured recovery programmes designed to optimize healing, restore function, and return you to your desired activities safely following surgery.",
                &[
                    "Hip Replacement - total and partial",
                    "Knee Replacement - total and partial",
                    "Spinal Surgery - discectomy, fusion, decompression",
                    "Shoulder Surgery - rotator cuff, arthroplasty",
                    "Orthopaedic Trauma - fracture fixation",
                    "ACL Reconstruction - sport-specific rehab",
                    "Fracture Rehabilitation - conservative and surgical",
                ],
                &[
                    "Post-surgical exercise protocols",
                    "Progressive loading programmes",
                    "Scar tissue mobilization",
                    "Range of movement restoration",
                    "Strength and conditioning",
                    "Functional activity training",
                    "Return to activity planning",
                ],
            ),
        ),
        entry(
            "balance",
            "⚖️",
            "Balance & Falls Prevention",
            "Targeted assessment and treatment for balance disorders, vestibular conditions, and recurrent falls. Building confidence and reducing fall risk.",
            ServiceDescriptor::new(
                "Balance & Falls Prevention",
                "Specialist assessment and treatment for balance disorders, reducing fall risk and building confidence in mobility.",
                &[
                    "Recurrent Falls - multi-factorial assessment",
                    "Balance Disorders - various etiologies",
                    "Vestibular Dysfunction - BPPV, vestibular neuritis",
                    "Dizziness & Vertigo - symptom management",
                    "Fear of Falling - confidence building",
                    "Gait Abnormalities - biomechanical correction",
                    "Muscle Weakness - targeted strengthening",
                ],
                &[
                    "Vestibular rehabilitation exercises",
                    "Balance retraining programmes",
                    "Epley maneuver for BPPV",
                    "Strength and conditioning",
                    "Environmental modification advice",
                    "Walking aid assessment",
                    "Fear avoidance therapy",
                ],
            ),
        ),
        entry(
            "msk",
            "🦴",
            "Musculoskeletal Therapy",
            "Treatment for back pain, neck pain, arthritis, and sports injuries. Manual therapy, exercise prescription, and pain management strategies.",
            ServiceDescriptor::new(
                "Musculoskeletal Physiotherapy",
                "Evidence-based treatment for acute and chronic musculoskeletal pain and dysfunction, helping you return to normal activities.",
                &[
                    "Lower Back Pain - acute and chronic",
                    "Neck Pain & Whiplash - trauma and postural",
                    "Osteoarthritis - all major joints",
                    "Rheumatoid Arthritis - inflammatory conditions",
                    "Sports Injuries - strains, sprains, tendinopathies",
                    "Shoulder Pain - rotator cuff, frozen shoulder",
                    "Tendinopathies - Achilles, patellar, tennis elbow",
                ],
                &[
                    "Manual therapy techniques",
                    "Joint mobilization and manipulation",
                    "Soft tissue massage",
                    "Exercise prescription",
                    "Postural correction",
                    "Ergonomic advice",
                    "Pain neuroscience education",
                ],
            ),
        ),
        entry(
            "respiratory",
            "🫁",
            "Respiratory Physiotherapy",
            "Breathing exercises, airway clearance techniques, and rehabilitation for COPD, post-COVID recovery, and chronic respiratory conditions.",
            ServiceDescriptor::new(
                "Respiratory Physiotherapy",
                "Specialist breathing and airway clearance techniques to improve respiratory function and quality of life.",
                &[
                    "COPD - chronic obstructive pulmonary disease",
                    "Post-COVID Recovery - long COVID rehabilitation",
                    "Bronchiectasis - airway clearance",
                    "Cystic Fibrosis - ongoing management",
                    "Chronic Breathlessness - symptom control",
                    "Pneumonia Recovery - post-infection rehab",
                    "Chest Infections - acute management",
                ],
                &[
                    "Breathing exercises and techniques",
                    "Airway clearance methods",
                    "Pulmonary rehabilitation programmes",
                    "Energy conservation strategies",
                    "Positioning for optimal breathing",
                    "Exercise tolerance training",
                    "Oxygen assessment and advice",
                ],
            ),
        ),
    ]
}
