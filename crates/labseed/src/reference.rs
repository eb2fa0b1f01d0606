//! Built-in reference data: lab test catalog, canonical slots, default region.
//!
//! Loaded once by the caller and treated as read-only afterwards.

use crate::catalog::Catalog;
use crate::geo::{Region, Ring};
use crate::schedule::{ScheduleSlot, Session};

/// Laboratory tests grouped by department.
pub const TEST_CATALOG: &[(&str, &[&str])] = &[
    (
        "Hematology Tests",
        &[
            "CBC (Complete Blood Count)",
            "Hemoglobin (Hb)",
            "RBC Count",
            "WBC Count",
            "Platelet Count",
            "ESR (Erythrocyte Sedimentation Rate)",
            "PCV (Packed Cell Volume)",
            "MCV, MCH, MCHC",
            "Peripheral Blood Smear",
            "Reticulocyte Count",
            "Bleeding Time (BT)",
            "Clotting Time (CT)",
            "Prothrombin Time (PT)",
            "INR (International Normalized Ratio)",
        ],
    ),
    (
        "Biochemistry Tests",
        &[
            "Blood Glucose (Fasting / PP / Random)",
            "HbA1c (Glycated Hemoglobin)",
            "Lipid Profile",
            "Total Cholesterol",
            "HDL",
            "LDL",
            "Triglycerides",
            "VLDL",
            "Liver Function Test (LFT)",
            "Bilirubin (Total, Direct, Indirect)",
            "SGOT / AST",
            "SGPT / ALT",
            "ALP (Alka Phosphatase)",
            "GGT",
            "Albumin",
            "Globulin",
            "Kidney Function Test (KFT / RFT)",
            "Urea",
            "Creatinine",
            "Uric Acid",
            "Electrolytes (Na⁺, K⁺, Cl⁻)",
            "Thyroid Profile (T3, T4, TSH)",
            "Calcium",
            "Phosphorus",
            "Magnesium",
            "CRP (C-Reactive Protein)",
            "Vitamin D",
            "Vitamin B12",
        ],
    ),
    (
        "Urine Tests",
        &[
            "Urine Routine and Microscopy",
            "Urine Culture",
            "Urine Pregnancy Test",
            "24-hour Urine Protein",
            "Urine Albumin / Creatinine Ratio",
        ],
    ),
    (
        "Stool Tests",
        &[
            "Stool Routine and Microscopy",
            "Stool Culture",
            "Occult Blood Test",
        ],
    ),
    (
        "Microbiology Tests",
        &[
            "Blood Culture",
            "Throat Swab Culture",
            "Sputum Culture",
            "Urine Culture",
            "Stool Culture",
            "Wound Swab Culture",
            "AFB (Acid Fast Bacilli for TB)",
            "Gram Stain",
            "KOH Mount",
        ],
    ),
    (
        "Serology & Immunology",
        &[
            "HIV Test (ELISA / Rapid)",
            "Hepatitis B Surface Antigen (HBsAg)",
            "Hepatitis C Antibody",
            "VDRL / RPR (Syphilis)",
            "Dengue NS1, IgM, IgG",
            "Widal Test (Typhoid)",
            "ASO Titre (Rheumatic Fever)",
            "Rheumatoid Factor (RA Test)",
            "CRP",
            "ANA (Anti-Nuclear Antibody)",
            "COVID-19 RT-PCR / Antibody Test",
        ],
    ),
    (
        "Hormone & Endocrine Tests",
        &[
            "Insulin",
            "Cortisol",
            "FSH",
            "LH",
            "Prolactin",
            "Testosterone",
            "Estrogen",
            "Beta-hCG",
        ],
    ),
    (
        "Histopathology & Cytology",
        &[
            "FNAC (Fine Needle Aspiration Cytology)",
            "Biopsy (Tissue Examination)",
            "Pap Smear",
        ],
    ),
    (
        "Panels / Packages",
        &[
            "Fever Panel",
            "Anemia Panel",
            "Diabetes Panel",
            "Infection Panel",
            "Cardiac Risk Markers (Troponin, CK-MB)",
            "TORCH Panel",
        ],
    ),
];

/// The nine offered appointment slots, three per session.
pub const CANONICAL_SLOTS: [(&str, Session); 9] = [
    ("08:30", Session::Morning),
    ("10:00", Session::Morning),
    ("11:30", Session::Morning),
    ("13:30", Session::Afternoon),
    ("15:00", Session::Afternoon),
    ("16:30", Session::Afternoon),
    ("18:30", Session::Evening),
    ("20:00", Session::Evening),
    ("21:30", Session::Evening),
];

/// Coarse mainland India outline as `(lon, lat)`, counterclockwise from Kutch.
const INDIA_OUTLINE: &[(f64, f64)] = &[
    (68.2, 23.7),
    (69.0, 22.4),
    (70.0, 20.8),
    (72.8, 19.0),
    (73.7, 15.7),
    (74.8, 12.9),
    (76.3, 9.9),
    (77.5, 8.1),
    (78.2, 8.9),
    (79.8, 10.3),
    (80.3, 13.1),
    (80.1, 15.5),
    (82.3, 16.6),
    (83.3, 17.7),
    (85.8, 19.8),
    (87.0, 21.5),
    (88.7, 21.6),
    (88.2, 24.0),
    (88.1, 26.3),
    (89.9, 26.0),
    (92.2, 25.0),
    (93.5, 24.0),
    (94.6, 25.6),
    (95.2, 26.8),
    (97.2, 28.0),
    (96.0, 29.4),
    (94.0, 29.1),
    (92.0, 27.8),
    (89.0, 27.3),
    (88.6, 28.1),
    (88.0, 27.9),
    (88.1, 26.5),
    (84.5, 27.3),
    (81.0, 28.6),
    (80.9, 30.2),
    (79.0, 31.2),
    (78.7, 32.6),
    (79.5, 34.4),
    (77.8, 35.5),
    (76.0, 35.8),
    (74.6, 35.0),
    (73.8, 34.3),
    (74.0, 33.0),
    (74.7, 32.4),
    (74.6, 31.0),
    (73.4, 29.9),
    (71.3, 28.0),
    (70.2, 27.9),
    (69.5, 26.8),
    (70.2, 25.7),
    (68.8, 24.3),
];

pub fn test_catalog() -> Catalog {
    TEST_CATALOG
        .iter()
        .map(|&(name, items)| (name, items.iter().copied()))
        .collect()
}

pub fn canonical_slots() -> Vec<ScheduleSlot> {
    CANONICAL_SLOTS
        .iter()
        .map(|&(time, session)| ScheduleSlot::new(time, session))
        .collect()
}

/// Service region used when no boundary file is supplied.
pub fn default_region() -> Region {
    Ring::from_coords(INDIA_OUTLINE).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{contains, point};

    #[test]
    fn catalog_shape() {
        let c = test_catalog();
        assert_eq!(c.categories().len(), 9);
        assert_eq!(c.flatten().len(), TOTAL_TESTS);
        // Same test name under two departments stays two distinct pairs.
        let cultures = c
            .flatten()
            .into_iter()
            .filter(|p| p.item == "Urine Culture")
            .count();
        assert_eq!(cultures, 2);
    }

    #[test]
    fn slots_cover_each_session_three_times() {
        let slots = canonical_slots();
        for s in Session::ALL {
            assert_eq!(slots.iter().filter(|x| x.session == s).count(), 3);
        }
    }

    #[test]
    fn default_region_sanity() {
        let r = default_region();
        // Nagpur, Delhi, Bengaluru, Guwahati.
        for (lon, lat) in [(79.1, 21.1), (77.2, 28.6), (77.6, 12.97), (91.7, 26.1)] {
            assert!(contains(point(lon, lat), &r), "({lon}, {lat})");
        }
        // Arabian Sea, Bay of Bengal, Tibet, Sri Lanka.
        for (lon, lat) in [(66.0, 15.0), (88.0, 15.0), (88.0, 32.0), (80.7, 7.5)] {
            assert!(!contains(point(lon, lat), &r), "({lon}, {lat})");
        }
        let bbox = r.bounding_box().unwrap();
        assert!(bbox.expected_attempts(&r) < 4.0);
    }

    const TOTAL_TESTS: usize = 87;
}
