//! Queryable entity families of the summit administration backend.
//!
//! Each kind carries its REST collection path and the fixed list of fields
//! a free-text term searches across. The lists mirror what the backend
//! indexes for each collection; they are data, not configuration.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    PromoCodes,
    Speakers,
    Sponsors,
    SponsoredProjects,
    Rooms,
    TaxTypes,
    EmailTemplates,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::PromoCodes,
        EntityKind::Speakers,
        EntityKind::Sponsors,
        EntityKind::SponsoredProjects,
        EntityKind::Rooms,
        EntityKind::TaxTypes,
        EntityKind::EmailTemplates,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            EntityKind::PromoCodes => "promo-codes",
            EntityKind::Speakers => "speakers",
            EntityKind::Sponsors => "sponsors",
            EntityKind::SponsoredProjects => "sponsored-projects",
            EntityKind::Rooms => "rooms",
            EntityKind::TaxTypes => "tax-types",
            EntityKind::EmailTemplates => "email-templates",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "promo-codes" => Some(EntityKind::PromoCodes),
            "speakers" => Some(EntityKind::Speakers),
            "sponsors" => Some(EntityKind::Sponsors),
            "sponsored-projects" => Some(EntityKind::SponsoredProjects),
            "rooms" => Some(EntityKind::Rooms),
            "tax-types" => Some(EntityKind::TaxTypes),
            "email-templates" => Some(EntityKind::EmailTemplates),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::PromoCodes => "Promo codes",
            EntityKind::Speakers => "Speakers",
            EntityKind::Sponsors => "Sponsors",
            EntityKind::SponsoredProjects => "Sponsored projects",
            EntityKind::Rooms => "Rooms",
            EntityKind::TaxTypes => "Tax types",
            EntityKind::EmailTemplates => "Email templates",
        }
    }

    /// REST collection path under the API base.
    pub fn api_path(&self) -> &'static str {
        match self {
            EntityKind::PromoCodes => "promo-codes",
            EntityKind::Speakers => "speakers",
            EntityKind::Sponsors => "sponsors",
            EntityKind::SponsoredProjects => "sponsored-projects",
            EntityKind::Rooms => "venues/all/rooms",
            EntityKind::TaxTypes => "tax-types",
            EntityKind::EmailTemplates => "mail-templates",
        }
    }

    /// Fields a free-text search term is matched against, in clause order.
    pub fn searchable_fields(&self) -> &'static [&'static str] {
        match self {
            EntityKind::PromoCodes => &[
                "code",
                "creator",
                "creator_email",
                "owner",
                "owner_email",
                "speaker",
                "speaker_email",
                "contact_email",
                "sponsor_company_name",
            ],
            EntityKind::Speakers => &["full_name", "first_name", "last_name", "email"],
            EntityKind::Sponsors => &["company_name", "sponsorship_name"],
            EntityKind::SponsoredProjects => &["name", "description"],
            EntityKind::Rooms => &["name"],
            EntityKind::TaxTypes => &["name", "tax_id"],
            EntityKind::EmailTemplates => &["identifier", "subject", "from_email"],
        }
    }
}
