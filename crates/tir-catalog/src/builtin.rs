//! # Built-In Reporting Dataset
//!
//! The fixed dataset shipped with the reporting desk: the landing catalog
//! of fifteen thematic areas, the sectioned question tree, the prefill
//! baselines for the questions that start with boilerplate text, and the
//! static review-committee comments attached to two special questions.
//!
//! This module is data, not logic. The question tree covers sections 1
//! and 2 plus the pending-comments and CAS follow-up sections; the full
//! questionnaire runs to 146+ questions supplied the same way.

use crate::area::ThematicArea;
use crate::prefill::PrefillMap;
use crate::question::{Catalog, QuestionContent, QuestionSection, QuestionSubSection};
use tir_core::ConventionLabel;

/// The reporting member state named on receipts and report headers.
pub const COUNTRY: &str = "Country X";

/// Identifier of the question carrying the static CEACR comment panel and
/// its dedicated reply field.
pub const STATIC_REPLY_QUESTION: &str = "R010";

/// Identifier of the pending-comments question, whose primary reply doubles
/// as its "comment addressed" signal.
pub const PENDING_COMMENTS_QUESTION: &str = "R146";

/// Identifier of the CAS follow-up item, which has no primary answer box —
/// only a reply to the Conference Committee conclusions.
pub const CAS_FOLLOW_UP_QUESTION: &str = "R_CAS_FOLLOW_UP";

/// The fifteen thematic areas of the landing catalog, in display order.
pub fn thematic_areas() -> Vec<ThematicArea> {
    vec![
        ThematicArea::new(
            1,
            "Occupational Safety and Health",
            [
                "C.155 / P.155",
                "C.187",
                "C.161",
                "C.120",
                "C.167",
                "C.176",
                "C.184",
                "C.13",
                "C.115",
                "C.119",
                "C.127",
                "C.136",
                "C.139",
                "C.148",
                "C.162",
                "C.170",
                "C.174",
            ],
        ),
        ThematicArea::new(2, "Forced Labour", ["C.29 / P.29", "C.105"]),
        ThematicArea::new(
            3,
            "Child Labour",
            ["C.138", "C.182", "C.6", "C.77", "C.79", "C.90", "C.124"],
        ),
        ThematicArea::new(
            4,
            "Freedom of Association, Collective Bargaining, Tripartite Consultation",
            [
                "C.87", "C.98", "C.144", "C.11", "C.84", "C.135", "C.141", "C.151", "C.154",
            ],
        ),
        ThematicArea::new(
            5,
            "Equality and Elimination of Violence and Harassment",
            ["C.100", "C.111", "C.156", "C.190"],
        ),
        ThematicArea::new(
            6,
            "Labour Inspection and Administration",
            ["C.81 / P.81", "C.129", "C.150"],
        ),
        ThematicArea::new(
            7,
            "Employment and Social Policy",
            [
                "C.122", "C.88", "C.140", "C.142", "C.159", "C.160", "C.181", "C.82", "C.94",
                "C.117", "C.158",
            ],
        ),
        ThematicArea::new(8, "Migrant Workers", ["C.97", "C.143"]),
        ThematicArea::new(
            9,
            "Social Security and Maternity Protection",
            [
                "C.12", "C.19", "C.71", "C.102", "C.118", "C.121", "C.130", "C.157", "C.168",
                "C.183",
            ],
        ),
        ThematicArea::new(10, "Fishers", ["C.188", "C.125"]),
        ThematicArea::new(11, "Maritime", ["MLC 2006", "C.185"]),
        ThematicArea::new(
            12,
            "Working Time",
            [
                "C.1", "C.14", "C.30", "C.47", "C.89/P.89", "C.106", "C.132", "C.153", "C.171",
                "C.175",
            ],
        ),
        ThematicArea::new(13, "Wages", ["C.26", "C.95", "C.99", "C.131", "C.173"]),
        ThematicArea::new(14, "Indigenous and Tribal peoples", ["C.169"]),
        ThematicArea::new(
            15,
            "Specific categories of workers",
            [
                "C.27",
                "C.110/P.110",
                "C.137",
                "C.149",
                "C.152",
                "C.172",
                "C.177",
                "C.189",
            ],
        ),
    ]
}

/// Look up a built-in thematic area by its numeric id.
pub fn thematic_area(id: u32) -> Option<ThematicArea> {
    thematic_areas().into_iter().find(|a| a.id.as_u32() == id)
}

/// Conventions preselected when a session opens on the given area.
///
/// The social-security area (id 9) opens with C.102 and C.183 active;
/// every other area opens with no selection.
pub fn preselected_conventions(area: &ThematicArea) -> Vec<ConventionLabel> {
    if area.id.as_u32() == 9 {
        area.conventions_with_codes(&["C.102", "C.183"])
    } else {
        Vec::new()
    }
}

/// The built-in question tree.
pub fn catalog() -> Catalog {
    Catalog {
        sections: vec![
            QuestionSection {
                title: "SECTION 1. LEGISLATION AND REPORTING".to_string(),
                introduction: None,
                sub_sections: vec![
                    QuestionSubSection {
                        title: Some("Relevant legislation and policies".to_string()),
                        topic: None,
                        questions: vec![QuestionContent::new(
                            "R001",
                            "Please provide a list of the legislation and administrative regulations, code of practices or other documents which apply the provisions of the ratified Conventions covered in this Thematic Implementation Report (TIR).",
                        )],
                    },
                    QuestionSubSection {
                        title: Some(
                            "Compliance with obligations under article 23 (2) of the ILO Constitution"
                                .to_string(),
                        ),
                        topic: None,
                        questions: vec![QuestionContent::new(
                            "R002",
                            "Please indicate the representative organizations of employers and workers to which copies of the present TIR have been communicated in accordance with article 23, paragraph 2, of the Constitution of the International Labour Organization. If copies of the TIR have not been communicated to representative organizations of employers and/or workers, or if they have been communicated to bodies other than such organizations, please supply information on any particular circumstances existing in your country which explain the procedure followed.",
                        )],
                    },
                    QuestionSubSection {
                        title: Some(
                            "Observations from organisations of employers and workers".to_string(),
                        ),
                        topic: None,
                        questions: vec![QuestionContent::new(
                            "R003",
                            "Please indicate whether you have received from the organizations of employers or workers concerned any observations, either of a general kind or in connection with the present or the previous TIR, regarding the practical application of the provisions of the Conventions concerned. If so, please communicate a copy of the observations received, and provide in the following box any comments to these observations, if any.",
                        )],
                    },
                ],
            },
            QuestionSection {
                title: "SECTION 2. SOCIAL SECURITY BRANCHES".to_string(),
                introduction: None,
                sub_sections: vec![
                    QuestionSubSection {
                        title: Some("Subsection 1. General provisions".to_string()),
                        topic: Some("Acceptance of obligations".to_string()),
                        questions: vec![QuestionContent::with_provisions(
                            "R004",
                            "Please specify, for each ratified convention, the relevant Parts for which your country accept the correspondent obligations.",
                            "Articles 2, 4 and 5 C102 - Articles 2, 3 and 5 C128 Guidance",
                        )],
                    },
                    QuestionSubSection {
                        title: None,
                        topic: Some("Temporary exceptions and derogations".to_string()),
                        questions: vec![QuestionContent::with_provisions(
                            "R005",
                            "Are there any temporary exceptions? Are they still in force?",
                            "Article 3 C102 - Articles 2 and 5 C121 - Articles 4, 41 and 42 C128 - Articles 2 and 33 C130 Guidance",
                        )],
                    },
                    QuestionSubSection {
                        title: None,
                        topic: Some("Exclusions".to_string()),
                        questions: vec![QuestionContent::with_provisions(
                            "R006",
                            "Are there any exclusions or exceptions in respect of specific categories of persons?",
                            "Article 77 C102 - Article 3 C121 - Articles 37, 38 and 39 C128 - Articles 3, 4 and 5 C130 Guidance",
                        )],
                    },
                    QuestionSubSection {
                        title: None,
                        topic: Some("Non-compulsory insurance".to_string()),
                        questions: vec![QuestionContent::with_provisions(
                            "R007",
                            "Has protection effected by means of non-compulsory insurance been considered for the purpose of compliance with the relevant Parts of the concerned Conventions?",
                            "Article 6 C102 - Article 6 C128 - Article 6 C130 Guidance",
                        )],
                    },
                    QuestionSubSection {
                        title: Some("Subsection 2. Medical Care".to_string()),
                        topic: Some("Contingency".to_string()),
                        questions: vec![QuestionContent::with_provisions(
                            "R008",
                            "What are the types of contingencies in respect of which medical care benefits are provided? (e.g., sickness, pregnancy and childbirth or need for preventive care).",
                            "Article 7 and 8 C102 - Article 7(a) C130 - Guidance",
                        )],
                    },
                    QuestionSubSection {
                        title: None,
                        topic: Some("Scope".to_string()),
                        questions: vec![QuestionContent::with_provisions(
                            "R009",
                            "What are the categories of persons covered by medical care benefits?  Please provide the statistical information as requested in the report form of the concerned convention. \n\nIn case employees or economically active persons are covered by medical care benefits, are their dependent spouses and children also entitled to medical care benefits?",
                            "Articles 9 and 76(2) C102 - Articles 10, 11 and 12 C130 - Guidance",
                        )],
                    },
                    QuestionSubSection {
                        title: None,
                        topic: Some("Types of medical care".to_string()),
                        questions: vec![QuestionContent::with_provisions(
                            "R010",
                            "What types of medical care benefits are provided? Please refer to the medical care benefits listed in the corresponding Articles of the ratified Convention.",
                            "Article 10 (1) C102 - Articles 13 and 14 C130 - Guidance",
                        )],
                    },
                    QuestionSubSection {
                        title: None,
                        topic: Some("Cost-sharing".to_string()),
                        questions: vec![QuestionContent::with_provisions(
                            "R011",
                            "Are the patients required to share in the cost of the medical care received? If yes, please specify the extent to which cost-sharing applies in relation to the medical care benefits provided under the ratified Convention. \nPlease specify whether cost-sharing is required in the case of pregnancy, childbirth, and their consequences.",
                            "Article 10 (2) C102 - Article 17 C130 - Guidance",
                        )],
                    },
                    QuestionSubSection {
                        title: None,
                        topic: Some("Objectives of medical care".to_string()),
                        questions: vec![QuestionContent::with_provisions(
                            "R012",
                            "What are the measures taken to ensure that medical care is provided with a view to maintaining, restoring or improving the health of patients and their ability to work and to attend to their personal needs.",
                            "Article 10 (3) C102 - Article 9 C130 - Guidance",
                        )],
                    },
                ],
            },
            QuestionSection {
                title: "SECTION 5. PENDING COMMENTS".to_string(),
                introduction: None,
                sub_sections: vec![QuestionSubSection {
                    title: Some("Pending comments".to_string()),
                    topic: None,
                    questions: vec![QuestionContent::new(
                        "R146",
                        "Please provide information in reply to pending comments, if any.",
                    )],
                }],
            },
            QuestionSection {
                title: "SECTION 6. FOLLOW-UP TO CAS CONCLUSIONS (ILC JUNE 2023)".to_string(),
                introduction: None,
                sub_sections: vec![QuestionSubSection {
                    title: None,
                    topic: None,
                    questions: vec![QuestionContent::new(
                        "R_CAS_FOLLOW_UP",
                        "Follow-up to the conclusions of the Committee on the Application of Standards (International Labour Conference, 111th Session, June 2023)",
                    )],
                }],
            },
        ],
    }
}

/// The built-in prefill baselines.
///
/// R001 and R004 through R012 open with boilerplate text drawn from the
/// previous reporting cycle; every other question starts blank.
pub fn prefills() -> PrefillMap {
    [
        (
            "R001",
            "The Federal Act on General Social Insurance, 1955 (ASVG).\n\nThe General Pensions Act, 2004.\n\nThe Maternity Protection Act 1979 - MSchGStF: Federal Law Gazette No. 221/1979 (WV) as amended by Federal Law Gazette No. 577/1980 (DFB)\n\nThe Unemployment Injury Act, 1977.\n\nThe Families\u{2019} Compensation Act, 1967.\n\nThe Administrative Court Procedure Act, 2013 (VwGVG).\n\nAgricultural Labour Act 2021 (LAG)",
        ),
        (
            "R004",
            "Country X has accepted Parts II (Medical care), IV (Unemployment benefit), V (Old-age benefit), VII (Family benefit) and VIII (Maternity benefit) of C102 and Part III (Old-age benefit) of C128.",
        ),
        ("R005", "No temporary exceptions."),
        ("R006", "No exclusions or exceptions."),
        ("R007", "Not applied."),
        (
            "R008",
            "Sickness, pregnancy and childbirth and need for preventive care are covered (sections 133, 154-156, and 159 of the ASVG).",
        ),
        (
            "R009",
            "Employees in paid employment; trainees; unemployed persons; recipients of certain social security benefits; spouses and partners, as well as children of ensured persons are mandatory covered (section 4 of the ASVG).\n\nEmployees whose remuneration is less than the established threshold (EUR 551.1 per month in 2025) are not compulsory covered (section 5 of the ASVG).\n\nStatistical data [to be filled by Government according to the report form for Articles 9 and 76(2) of C102]",
        ),
        (
            "R010",
            "Medical treatment, dental care, hospitalization, pharmaceutical supplies, prosthesis, nursing care, transportation, and maternity medical care (sections 133, 135-137, 144 and 159 of the ASVG).",
        ),
        (
            "R011",
            "No cost-sharing is generally required for medical treatment (sections 133 and 135 of the ASVG).\n\nIn the case of hospitalisation, a co-payment of up to EUR 17 per day may be required, for a maximum of 28 days per calendar year (Section 154a ASVG).\n\nA co-payment of up to 10% may apply for prosthetic appliances (Section 137 ASVG).\n\nThe Reimbursement Code (Section 30b ASVG) sets out the list of medicinal products reimbursed in Country X. A fixed prescription fee of EUR 7.10 per item (as of 2024) applies (Section 136 ASVG).\n\nNo cost-sharing is required for maternity medical care (Section 159 ASVG).",
        ),
        (
            "R012",
            "The medical treatment is intended to restore, consolidate or improve health, the ability to work and the ability to meet vital personal needs to the greatest extent possible (section 133 of the ASVG).",
        ),
    ]
    .into_iter()
    .collect()
}

/// The static CEACR comment displayed on the R010 panel, which the
/// government replies to in a dedicated box.
pub const STATIC_CEACR_COMMENT: &str = "The BAK indicates that workers with earnings less than \u{20ac}425.70 per month are covered only in case of incapacity for work due to an industrial accident, but not in case of suspension of earnings due to ill health, as required by the Convention. The BAK further indicates that the number of domestic workers in \u{201c}marginal employment\u{201d} who are excluded from sickness insurance coverage is higher than those who are fully insured. The Committee recalls that, notwithstanding Article 2(1) of the Convention which requires that manual and non-manual workers, including apprentices, employed by industrial undertakings and commercial undertakings, outworkers and domestic servants be compulsorily covered by sickness insurance, Article 2(2)(a) allows some exceptions to be made in respect of employment of a certain nature, including occasional, casual and subsidiary employment. **_In view of the above, the Committee requests the Government to indicate how many workers are excluded from sickness insurance due to the earnings threshold, and to provide information on any other means of protection to ensure that these workers, in case of sickness, have access to medical care and, where sickness involves a suspension of earnings, to income support._**";

/// The Conference Committee follow-up comment displayed on the CAS
/// follow-up panel.
pub const CAS_FOLLOW_UP_CEACR_COMMENT: &str = "In its previous comments, the Committee noted that the Law on prohibiting the recruitment of child soldiers criminalizes the recruitment of children under the age of 18 years into the Afghan Security Forces. The Committee also noted that a total of 116 cases of recruitment and use of children, including one girl, were documented in 2015. Out of these: 13 cases were attributed to the Afghan National Defence and Security forces; five to the Afghan National Police; five to the Afghan Local Police; and three to the Afghan National Army; while the majority of verified cases were attributed to the Taliban and other armed groups who used children for combat and suicide attacks. The United Nations verified 1,306 incidents resulting in 2,829 child casualties (733 killed and 2,096 injured), an average of 53 children were killed or injured every week. A total of 92 children were abducted in 2015 in 23 incidents.\n\nThe Committee notes that the Conference Committee recommended that the Government take measures as a matter of urgency to ensure the full and immediate demobilization of all children and to put a stop, in practice, to the forced recruitment of children into armed forces and groups. **_It once again urges the Government to take immediate and effective measures to ensure that thorough investigations and robust prosecutions of persons who forcibly recruit children under 18 years of age for use in armed conflict are carried out, and that sufficiently effective and dissuasive penalties are imposed in practice._**";

#[cfg(test)]
mod tests {
    use super::*;
    use tir_core::QuestionId;

    #[test]
    fn test_fifteen_areas_in_catalog_order() {
        let areas = thematic_areas();
        assert_eq!(areas.len(), 15);
        assert_eq!(areas[0].id.as_u32(), 1);
        assert_eq!(areas[14].id.as_u32(), 15);
        assert_eq!(areas[1].title, "Forced Labour");
    }

    #[test]
    fn test_area_lookup() {
        assert_eq!(thematic_area(9).unwrap().title, "Social Security and Maternity Protection");
        assert!(thematic_area(99).is_none());
    }

    #[test]
    fn test_question_ids_unique_and_ordered() {
        let ids = catalog().question_ids();
        assert_eq!(ids.first().unwrap().as_str(), "R001");
        assert_eq!(ids.last().unwrap().as_str(), CAS_FOLLOW_UP_QUESTION);

        let mut seen = std::collections::HashSet::new();
        for id in &ids {
            assert!(seen.insert(id.clone()), "duplicate question id: {id}");
        }
    }

    #[test]
    fn test_special_questions_present() {
        let catalog = catalog();
        for special in [STATIC_REPLY_QUESTION, PENDING_COMMENTS_QUESTION, CAS_FOLLOW_UP_QUESTION] {
            assert!(catalog.contains(&QuestionId::new(special)), "missing {special}");
        }
    }

    #[test]
    fn test_prefills_cover_boilerplate_questions_only() {
        let prefills = prefills();
        assert_eq!(prefills.len(), 10);
        assert!(prefills.get(&QuestionId::new("R001")).is_some());
        assert!(prefills.get(&QuestionId::new("R002")).is_none());
        assert!(prefills.get(&QuestionId::new("R146")).is_none());
    }

    #[test]
    fn test_every_prefilled_id_exists_in_catalog() {
        let catalog = catalog();
        for (id, _) in prefills().iter() {
            assert!(catalog.contains(id), "prefill for unknown question {id}");
        }
    }

    #[test]
    fn test_guidance_derivation_on_builtin_data() {
        let catalog = catalog();
        assert!(catalog.question(&QuestionId::new("R004")).unwrap().has_guidance());
        assert!(!catalog.question(&QuestionId::new("R001")).unwrap().has_guidance());
    }

    #[test]
    fn test_area_nine_preselection() {
        let area = thematic_area(9).unwrap();
        let selected = preselected_conventions(&area);
        let labels: Vec<&str> = selected.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["C.102", "C.183"]);
    }

    #[test]
    fn test_other_areas_have_no_preselection() {
        let area = thematic_area(2).unwrap();
        assert!(preselected_conventions(&area).is_empty());
    }
}
