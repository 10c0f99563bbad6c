//! Fixed site copy: the firm's details, hero slides and the services catalogue.

pub const FIRM_NAME: &str = "Blacksuit Solicitors";
pub const ADDRESS_LINE_1: &str = "123 Legal Avenue, Victoria Island";
pub const ADDRESS_LINE_2: &str = "Lagos State, Nigeria";
pub const MAIN_PHONE: &str = "+234 (0) 123 456 7890";
pub const EMERGENCY_PHONE: &str = "+234 (0) 813 737 8905";
pub const WHATSAPP_NUMBER: &str = "+234 813 737 8905";
pub const EMAIL: &str = "info@blacksuitsolicitors.com";

pub const OFFICE_LAT: f64 = 6.5568;
pub const OFFICE_LON: f64 = 3.3792;
pub const OFFICE_ZOOM: u8 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub image: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        title: "Leading Legal Innovation in Africa",
        subtitle: "Specialized legal solutions for modern businesses, fintech, and technology-driven enterprises",
        quote: "Excellence is never an accident. It is always the result of high intention, sincere effort, and intelligent execution.",
        author: "Aristotle",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80",
    },
    Slide {
        title: "Your Strategic Legal Partner",
        subtitle: "Navigate complex regulations with confidence through our comprehensive legal expertise",
        quote: "The good lawyer is not the man who has an eye to every side and angle of contingency, but who throws himself on your part so heartily, that he can get you out of a scrape.",
        author: "Ralph Waldo Emerson",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80",
    },
    Slide {
        title: "Protecting Your Digital Future",
        subtitle: "Data protection, cybersecurity, and technology law solutions for the digital age",
        quote: "In matters of style, swim with the current; in matters of principle, stand like a rock.",
        author: "Thomas Jefferson",
        image: "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub title: &'static str,
    pub short_desc: &'static str,
    pub full_description: &'static str,
    pub features: &'static [&'static str],
    pub case_studies: &'static [&'static str],
    pub key_benefits: &'static [&'static str],
    pub icon: &'static str,
}

pub const SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor {
        title: "Technology & Innovation Law",
        short_desc: "Comprehensive legal support for technology companies and digital innovation",
        full_description: "Navigate the complex landscape of technology law with our specialized expertise in fintech regulation, cybersecurity compliance, artificial intelligence governance, and startup legal frameworks. We help innovative companies grow with confidence while staying on the right side of fast-moving regulation.",
        features: &[
            "Fintech Regulatory Compliance & Licensing",
            "Cybersecurity Law & Data Breach Response",
            "AI & Machine Learning Legal Framework",
            "Startup Legal Audits & Due Diligence",
            "Tech Platform Terms & Privacy Policies",
            "Digital Asset & Cryptocurrency Law",
            "Software Licensing & IP Protection",
            "Cloud Computing & SaaS Agreements",
        ],
        case_studies: &[
            "Helped 50+ fintech startups achieve CBN regulatory compliance",
            "Successfully defended major tech company in data breach incident",
            "Structured $10M Series A funding for AI startup",
        ],
        key_benefits: &[
            "Reduce regulatory risks by up to 90%",
            "Accelerate time-to-market for tech products",
            "Protect intellectual property assets",
            "Ensure GDPR and NDPA compliance",
        ],
        icon: "🌐",
    },
    ServiceDescriptor {
        title: "Intellectual Property & Data Protection",
        short_desc: "Comprehensive IP protection and data privacy solutions",
        full_description: "Protect your valuable intellectual assets and ensure robust data privacy compliance with our comprehensive IP and data protection services. From trademark registration to GDPR compliance, we keep your ideas and your customers' data safe.",
        features: &[
            "Trademark Registration & Enforcement",
            "Copyright Protection & Licensing",
            "Patent Application & Portfolio Management",
            "Trade Secret Protection",
            "NDPA & GDPR Compliance Strategy",
            "Data Breach Response & Incident Management",
            "Privacy Policy & Terms of Service Drafting",
            "Cross-border Data Transfer Agreements",
        ],
        case_studies: &[
            "Secured trademark protection for 200+ brands across Africa",
            "Managed data breach response for multinational corporation",
            "Recovered $2M in IP infringement damages",
        ],
        key_benefits: &[
            "Comprehensive IP asset protection",
            "99.9% data compliance rate",
            "Rapid breach response capabilities",
            "International IP portfolio management",
        ],
        icon: "🛡",
    },
    ServiceDescriptor {
        title: "Corporate & Compliance Services",
        short_desc: "Business structuring, governance, and regulatory compliance",
        full_description: "Establish and maintain your business with confidence through our comprehensive corporate and compliance services. From incorporation to ongoing governance, we ensure your business operates within the law at every stage of growth.",
        features: &[
            "Business Incorporation & Registration",
            "Corporate Governance & Board Advisory",
            "ESG Implementation & Reporting",
            "Regulatory Licensing & Permits",
            "Compliance Monitoring & Audits",
            "Risk Assessment & Management",
            "Contract Drafting & Review",
            "Merger & Acquisition Support",
        ],
        case_studies: &[
            "Incorporated 300+ businesses across various sectors",
            "Achieved 100% compliance rate for regulated clients",
            "Facilitated $50M+ in M&A transactions",
        ],
        key_benefits: &[
            "Streamlined business setup process",
            "Ongoing compliance monitoring",
            "Risk mitigation strategies",
            "Strategic growth advisory",
        ],
        icon: "🏢",
    },
    ServiceDescriptor {
        title: "ADR & Legal Strategy",
        short_desc: "Alternative dispute resolution and strategic legal counsel",
        full_description: "Resolve disputes efficiently and cost-effectively through our alternative dispute resolution services. Our experienced mediators and arbitrators help parties reach mutually beneficial solutions while preserving valuable business relationships.",
        features: &[
            "Commercial Mediation Services",
            "International Arbitration",
            "Negotiation Strategy & Support",
            "Conflict Resolution Training",
            "Settlement Agreement Drafting",
            "Enforcement of Arbitral Awards",
            "Cross-border Dispute Resolution",
            "Litigation Risk Assessment",
        ],
        case_studies: &[
            "Resolved 90% of disputes through mediation",
            "Recovered $15M+ through arbitration proceedings",
            "Achieved favorable settlements in complex international disputes",
        ],
        key_benefits: &[
            "Cost-effective dispute resolution",
            "Faster resolution times",
            "Preserves business relationships",
            "Confidential proceedings",
        ],
        icon: "⚖",
    },
    ServiceDescriptor {
        title: "Real Estate & Property Law",
        short_desc: "Complete property law services and real estate transactions",
        full_description: "Navigate Nigeria's complex real estate landscape with confidence through our comprehensive property law services. From due diligence to transaction completion, we ensure secure and compliant property dealings.",
        features: &[
            "Property Due Diligence & Title Verification",
            "Real Estate Transaction Management",
            "Land Use Act Compliance",
            "Property Development Legal Support",
            "Lease Agreement Drafting & Review",
            "Property Dispute Resolution",
            "Real Estate Investment Structuring",
            "Construction Contract Management",
        ],
        case_studies: &[
            "Completed 500+ property transactions worth $100M+",
            "Resolved complex land title disputes",
            "Structured major real estate development projects",
        ],
        key_benefits: &[
            "Secure property investments",
            "Clear title verification",
            "Reduced transaction risks",
            "Expert local knowledge",
        ],
        icon: "💼",
    },
];

/// Options for the contact form's service picker: the catalogue plus a catch-all.
pub fn service_options() -> impl Iterator<Item = &'static str> {
    SERVICES
        .iter()
        .map(|s| s.title)
        .chain(std::iter::once("General Legal Consultation"))
}

pub const URGENCY_OPTIONS: &[&str] = &[
    "Low - General inquiry",
    "Medium - Within 1 week",
    "High - Within 2-3 days",
    "Urgent - Same day response needed",
];

/// `tel:` link for a number as written in the copy.
pub fn tel_href(number: &str) -> String {
    let dialable: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", dialable)
}

pub fn maps_search_url(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={},{}", lat, lon)
}

pub fn whatsapp_chat_url(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogues_are_non_empty() {
        assert_eq!(SLIDES.len(), 3);
        assert_eq!(SERVICES.len(), 5);
        for service in SERVICES {
            assert!(!service.features.is_empty());
            assert!(!service.case_studies.is_empty());
            assert!(!service.key_benefits.is_empty());
        }
    }

    #[test]
    fn service_picker_ends_with_general_consultation() {
        let options: Vec<_> = service_options().collect();
        assert_eq!(options.len(), SERVICES.len() + 1);
        assert_eq!(options.first().copied(), Some("Technology & Innovation Law"));
        assert_eq!(options.last().copied(), Some("General Legal Consultation"));
    }

    #[test]
    fn maps_link_carries_office_coordinate() {
        let url = maps_search_url(OFFICE_LAT, OFFICE_LON);
        assert_eq!(url, "https://www.google.com/maps/search/?api=1&query=6.5568,3.3792");
    }

    #[test]
    fn tel_link_drops_whitespace() {
        assert_eq!(tel_href(EMERGENCY_PHONE), "tel:+234(0)8137378905");
    }

    #[test]
    fn whatsapp_link_keeps_digits_and_encodes_text() {
        let url = whatsapp_chat_url(WHATSAPP_NUMBER, "Hello, I need advice");
        assert_eq!(url, "https://wa.me/2348137378905?text=Hello%2C%20I%20need%20advice");
    }
}
