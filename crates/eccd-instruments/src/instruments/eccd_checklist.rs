use crate::Instrument;
use crate::domain::Domain;
use crate::scoring::DomainDefinition;

/// ECCD Checklist: the Early Childhood Care and Development checklist used
/// by child development centers for children aged 3.1 to 5.11.
/// Seven domains of yes/no items; scaled scores mean 10, SD 3; standard
/// score mean 100, SD 15.
pub struct EccdChecklist;

impl Instrument for EccdChecklist {
    fn id(&self) -> &str {
        "eccd_checklist"
    }

    fn name(&self) -> &str {
        "ECCD Checklist"
    }

    fn domains(&self) -> &[DomainDefinition] {
        static DOMAINS: std::sync::LazyLock<Vec<DomainDefinition>> =
            std::sync::LazyLock::new(|| {
                vec![
                    domain(Domain::GrossMotor, 13, "Climbing, running, jumping, balance"),
                    domain(Domain::FineMotor, 11, "Grasping, drawing, copying shapes"),
                    domain(Domain::SelfHelp, 27, "Feeding, dressing, toileting, bathing"),
                    domain(Domain::ReceptiveLanguage, 5, "Following directions, pointing"),
                    domain(Domain::ExpressiveLanguage, 8, "Naming, sentences, recounting events"),
                    domain(Domain::Cognitive, 21, "Matching, sorting, counting, concepts"),
                    domain(Domain::SocialEmotional, 24, "Play, sharing, feelings, relationships"),
                ]
            });
        &DOMAINS
    }
}

fn domain(domain: Domain, item_count: u32, description: &str) -> DomainDefinition {
    DomainDefinition {
        domain,
        item_count,
        description: Some(description.to_string()),
    }
}
