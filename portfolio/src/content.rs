// static site content
//
// every record is hard-coded and immutable; sections borrow straight from these slices.
// ids are stable and are used as keys when rendering lists
pub const OWNER_NAME: &str = "Junaid Arshad Malik";
pub const OWNER_SHORT: &str = "Junaid";
pub const BRAND: &str = "SPECT3R.";
pub const TAGLINE: &str = "Turning digital chaos into clarity";
pub const CONTACT_EMAIL: &str = "junaidarshad.info@gmail.com";
pub const LOCATION: &str = "Islamabad, Pakistan";
pub const ALL_WRITEUPS_URL: &str = "https://theflash2k.me";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { anchor: "about", label: "About" },
    NavItem { anchor: "experience", label: "Experience" },
    NavItem { anchor: "skills", label: "Skills" },
    NavItem { anchor: "projects", label: "Projects" },
    NavItem { anchor: "writeups", label: "Writeups" },
    NavItem { anchor: "testimonials", label: "Testimonials" },
    NavItem { anchor: "contact", label: "Contact" },
];

// the footer skips the experience timeline
pub const QUICK_LINKS: &[NavItem] = &[
    NavItem { anchor: "about", label: "About" },
    NavItem { anchor: "skills", label: "Skills" },
    NavItem { anchor: "projects", label: "Projects" },
    NavItem { anchor: "writeups", label: "Writeups" },
    NavItem { anchor: "testimonials", label: "Testimonials" },
    NavItem { anchor: "contact", label: "Contact" },
];

pub const HERO_TITLES: &[&str] = &[
    "Penetration Tester",
    "Digital Investigator.",
    "Ethical Hacker.",
    "Malware Analyst",
    "CTF Enthusiast.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Shield,
    Search,
    Code,
    Crosshair,
    Github,
    Linkedin,
    Twitter,
    Mail,
}

impl Icon {
    // a glyph stands in for the icon font the page does not ship
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Shield => "🛡",
            Icon::Search => "🔍",
            Icon::Code => "</>",
            Icon::Crosshair => "⌖",
            Icon::Github => "GH",
            Icon::Linkedin => "in",
            Icon::Twitter => "X",
            Icon::Mail => "✉",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub delay: f32,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "With over a year of experience in the cybersecurity field, I've worked with numerous organizations to strengthen their security posture and investigate digital threats.",
    "My approach combines technical expertise with strategic thinking to deliver comprehensive security solutions that work in the real world.",
    "I regularly participate in Capture The Flag (CTF) competitions and contribute to open-source projects to stay at the cutting edge of the field.",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Shield,
        title: "Network Security",
        description: "Building and maintaining secure network infrastructure with advanced protection mechanisms.",
        delay: 0.2,
    },
    Feature {
        icon: Icon::Search,
        title: "Digital Forensics",
        description: "Uncovering digital evidence and analyzing security incidents to identify causes and culprits.",
        delay: 0.4,
    },
    Feature {
        icon: Icon::Code,
        title: "Penetration Testing",
        description: "Examining Websites, Systems and networks to look for the security flaws and fix them before attackers could leverage them.",
        delay: 0.6,
    },
    Feature {
        icon: Icon::Crosshair,
        title: "Threat Hunting",
        description: "Proactively searching for and neutralizing threats that evade traditional security solutions.",
        delay: 0.8,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubProject {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
    pub projects: &'static [SubProject],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Cyber Security Analyst",
        organization: "Freelancing",
        period: "May 2024 - Present",
        description: &[
            "As a freelance Cyber Security Analyst, I provide end-to-end security solutions including vulnerability assessments, penetration testing, malware analysis, network defense, and incident response.",
            "I specialize in securing web applications, cloud infrastructures, and enterprise networks, ensuring confidentiality, integrity, and availability.",
            "My work also involves creating custom security tools, conducting forensic investigations, and implementing proactive defense strategies aligned with best industry practices and compliance standards.",
        ],
        projects: &[],
    },
    Experience {
        title: "Cyber Security Analyst",
        organization: "NexGen Guards",
        period: "September 2024 - December 2024",
        description: &[
            "Conducted in-depth penetration testing on diverse systems, successfully identifying and mitigating critical security vulnerabilities to strengthen overall cybersecurity posture.",
            "Designed and deployed five custom Capture The Flag (CTF) challenges and vulnerable machines for hands-on attack-defense exercises, leading to a 20% increase in student engagement with cybersecurity training.",
            "Collaborated with cross-functional teams in high-pressure environments, consistently delivering actionable security insights within tight deadlines.",
        ],
        projects: &[],
    },
    Experience {
        title: "Jr Penetration Tester Intern",
        organization: "EncryptEdge Labs",
        period: "September 2024 - November 2024",
        description: &[
            "Performed thorough penetration testing on five web applications and seven systems, uncovering critical security vulnerabilities and gaps in cybersecurity defenses.",
            "Independently simulated sophisticated cyberattacks, resulting in the development of robust defensive strategies that significantly enhanced overall security posture.",
            "Utilized advanced tools including Burp Suite, Nessus, OWASP ZAP, and Metasploit to conduct assessments and deliver detailed, actionable reports.",
            "Successfully completed several hands-on labs, including the main course capstone and five advanced main labs, showcasing technical proficiency and producing comprehensive documentation to demonstrate analytical and reporting skills.",
        ],
        projects: &[],
    },
    Experience {
        title: "Web Security Researcher",
        organization: "National Center of Cyber-Security",
        period: "June 2024 - September 2024",
        description: &[],
        projects: &[
            SubProject {
                name: "Social Engineering Ad Detector",
                description: "Developed a custom web crawler to gather a large dataset of online advertisements used in social engineering attacks. The collected data was utilized to train a machine learning model capable of detecting over 90% of social engineering ads with high precision. The solution enhances online safety by identifying deceptive content in real time.",
            },
            SubProject {
                name: "Outdated Component Detector",
                description: "Contributed to the development of an advanced tool for analyzing web pages to identify outdated or vulnerable components (e.g., libraries, frameworks). This tool aids in improving website security posture by proactively flagging deprecated or insecure technologies in use.",
            },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
    pub delay: f32,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Red Team",
        skills: &[
            "Penetration Testing",
            "API Pentesting",
            "Social Engineering",
            "Red Team Operations",
            "Physical Security",
        ],
        delay: 0.2,
    },
    SkillCategory {
        title: "Blue Team",
        skills: &[
            "Threat Detection",
            "Incident Response",
            "Log Analysis",
            "Threat Hunting",
            "Malware Analysis",
        ],
        delay: 0.4,
    },
    SkillCategory {
        title: "Tools & Platforms",
        skills: &[
            "Metasploit",
            "Burp Suite",
            "Wireshark",
            "Nmap",
            "Kali Linux",
            "Splunk",
            "Ghidra",
        ],
        delay: 0.6,
    },
    SkillCategory {
        title: "GRC",
        skills: &[
            "ISO 27001",
            "NIST",
            "Risk Assessment",
            "Compliance",
            "Policy Development",
        ],
        delay: 0.8,
    },
    SkillCategory {
        title: "Programming",
        skills: &["Python", "Bash", "PowerShell", "C/C++", "JavaScript"],
        delay: 1.0,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_link: Option<&'static str>,
    pub code_link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "SecureNet Analyzer",
        description: "A network traffic analysis tool for detecting anomalies and potential security threats.",
        detailed_description: "SecureNet Analyzer is a sophisticated network traffic analysis tool designed to detect anomalies and potential security threats in real-time. Leveraging advanced machine learning algorithms and heuristic analysis, it can identify patterns indicative of malicious activity, data exfiltration attempts, and zero-day exploits. The system features a user-friendly dashboard for security analysts to monitor and respond to threats effectively, with detailed logging and reporting capabilities.",
        image: "https://images.pexels.com/photos/5380664/pexels-photo-5380664.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["Python", "Machine Learning", "Network Security", "TensorFlow"],
        demo_link: Some("https://secureanalyzer.example.com"),
        code_link: Some("https://github.com/junaid/secure-analyzer"),
    },
    Project {
        id: 2,
        title: "MalwareX Scanner",
        description: "An advanced malware detection and analysis platform for identifying sophisticated threats.",
        detailed_description: "MalwareX Scanner is a comprehensive malware detection and analysis platform designed to identify and neutralize sophisticated threats, including polymorphic malware, fileless attacks, and advanced persistent threats (APTs). The system employs dynamic analysis in isolated sandbox environments, coupled with static code analysis and machine learning-based pattern recognition to provide accurate threat identification with minimal false positives. Security teams can use its detailed reports to understand attack vectors and improve defensive postures.",
        image: "https://images.pexels.com/photos/5380592/pexels-photo-5380592.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["C++", "Assembly", "Reverse Engineering", "Sandbox"],
        demo_link: Some("https://malwarex.example.com"),
        code_link: Some("https://github.com/junaid/malwarex"),
    },
    Project {
        id: 3,
        title: "CryptoGuard",
        description: "A blockchain security auditing tool for identifying vulnerabilities in smart contracts.",
        detailed_description: "CryptoGuard is a specialized blockchain security auditing tool designed to identify vulnerabilities in smart contracts before deployment. The platform performs comprehensive static and dynamic analysis of Solidity code, checking for common vulnerabilities such as reentrancy attacks, integer overflow/underflow, and front-running opportunities. With support for multiple blockchain platforms including Ethereum, Binance Smart Chain, and Polygon, CryptoGuard helps developers and auditors ensure the security and integrity of decentralized applications and financial systems.",
        image: "https://images.pexels.com/photos/8370752/pexels-photo-8370752.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["Solidity", "Blockchain", "Smart Contracts", "Ethereum"],
        demo_link: None,
        code_link: Some("https://github.com/junaid/cryptoguard"),
    },
    Project {
        id: 4,
        title: "PhishDetect",
        description: "An AI-powered phishing detection service that identifies and neutralizes social engineering attempts.",
        detailed_description: "PhishDetect is an AI-powered phishing detection service designed to identify and neutralize sophisticated social engineering attempts. Using advanced natural language processing and computer vision algorithms, it analyzes email content, sender behavior, link properties, and website characteristics to determine phishing probability with high accuracy. The system integrates with popular email platforms and web browsers, providing real-time protection for users while continuously learning from new attack patterns to improve detection capabilities.",
        image: "https://images.pexels.com/photos/5380635/pexels-photo-5380635.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["Python", "Machine Learning", "NLP", "Email Security"],
        demo_link: Some("https://phishdetect.example.com"),
        code_link: None,
    },
    Project {
        id: 5,
        title: "ForensicDataMiner",
        description: "A digital forensics toolkit for recovering and analyzing evidence from various digital sources.",
        detailed_description: "ForensicDataMiner is a comprehensive digital forensics toolkit designed for professional investigators to recover and analyze evidence from various digital sources, including damaged devices, deleted files, and encrypted storage. The platform supports a wide range of file systems and device types, with specialized modules for memory forensics, timeline analysis, and cryptographic key recovery. Its intuitive workflow system ensures proper chain of custody documentation while providing powerful visualization tools to correlate evidence across multiple sources.",
        image: "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["C", "Python", "Digital Forensics", "Data Recovery"],
        demo_link: None,
        code_link: Some("https://github.com/junaid/forensic-miner"),
    },
    Project {
        id: 6,
        title: "ThreatIntel Dashboard",
        description: "A real-time threat intelligence platform aggregating data from multiple sources for security analysts.",
        detailed_description: "ThreatIntel Dashboard is a sophisticated real-time threat intelligence platform that aggregates and correlates data from multiple sources, including commercial feeds, open-source intelligence, dark web monitoring, and internal security systems. Designed for security analysts and SOC teams, it provides customizable dashboards with advanced filtering, alerting, and visualization capabilities to identify emerging threats relevant to an organization's specific risk profile. The platform features automated indicator of compromise (IOC) extraction and MITRE ATT&CK framework mapping to enhance threat hunting and incident response activities.",
        image: "https://images.pexels.com/photos/5380659/pexels-photo-5380659.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["JavaScript", "React", "API Integration", "Visualization"],
        demo_link: Some("https://threatintel.example.com"),
        code_link: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Writeup {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub url: &'static str,
}

pub const WRITEUPS: &[Writeup] = &[
    Writeup {
        id: 1,
        title: "Analyzing the SolarWinds Supply Chain Attack",
        description: "A detailed breakdown of the 2020 SolarWinds attack methodology, impact, and lessons learned for cybersecurity professionals.",
        date: "Jun 15, 2023",
        read_time: "12 min read",
        image: "https://images.pexels.com/photos/1181467/pexels-photo-1181467.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["Supply Chain", "APT", "Incident Analysis"],
        url: "#",
    },
    Writeup {
        id: 2,
        title: "Zero-Day Vulnerability Discovery Methodology",
        description: "A practical guide to discovering zero-day vulnerabilities in web applications using fuzzing and static analysis techniques.",
        date: "Apr 28, 2023",
        read_time: "18 min read",
        image: "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["Vulnerability Research", "Web Security", "Fuzzing"],
        url: "#",
    },
    Writeup {
        id: 3,
        title: "CTF Writeup: Breaking Bitwarden's Encryption",
        description: "A step-by-step walkthrough of a recent Capture The Flag challenge involving password manager encryption schemes.",
        date: "Mar 12, 2023",
        read_time: "15 min read",
        image: "https://images.pexels.com/photos/1089438/pexels-photo-1089438.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["CTF", "Cryptography", "Password Managers"],
        url: "#",
    },
    Writeup {
        id: 4,
        title: "Securing Kubernetes: A Defense-in-Depth Approach",
        description: "Comprehensive strategies for securing Kubernetes clusters in production environments against common attack vectors.",
        date: "Feb 5, 2023",
        read_time: "20 min read",
        image: "https://images.pexels.com/photos/1181271/pexels-photo-1181271.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["Kubernetes", "Cloud Security", "DevSecOps"],
        url: "#",
    },
    Writeup {
        id: 5,
        title: "Reversing Android Malware: Case Study of FluBot",
        description: "Technical analysis of FluBot Android malware, including deobfuscation techniques and command-and-control infrastructure.",
        date: "Jan 18, 2023",
        read_time: "22 min read",
        image: "https://images.pexels.com/photos/193003/pexels-photo-193003.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["Malware Analysis", "Mobile Security", "Reverse Engineering"],
        url: "#",
    },
    Writeup {
        id: 6,
        title: "Building a Home SOC with Open Source Tools",
        description: "A practical guide to setting up a personal Security Operations Center using free and open-source security tools.",
        date: "Dec 3, 2022",
        read_time: "16 min read",
        image: "https://images.pexels.com/photos/5380642/pexels-photo-5380642.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tags: &["SOC", "Open Source", "Monitoring"],
        url: "#",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar: Option<&'static str>,
}

impl Testimonial {
    // shown in place of a missing avatar
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        quote: "Junaid Arshad Malik made a strong impression during his 4-month internship at NCCS. He contributed to key modules including scraping, optimization, multithreading, and server configuration, all focused on web security and automated pentesting. Junaid's technical expertise, collaborative nature, and clear communication made him a valuable asset to our team. I highly recommend him for any future projects.",
        name: "Sameer Khattak",
        role: "Team Lead",
        company: "NCCS",
        avatar: None,
    },
    Testimonial {
        id: 2,
        quote: "The incident response services provided by Junaid were exceptional. When we detected a potential breach, his quick action and forensic capabilities helped us contain the threat and prevent data loss. The detailed post-incident report was invaluable for improving our security posture.",
        name: "Michael Chen",
        role: "CISO",
        company: "Global Retail Corp",
        avatar: Some("https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
    },
    Testimonial {
        id: 3,
        quote: "Working with Junaid on our security compliance initiative was a game-changer. His deep knowledge of regulatory requirements and practical implementation strategies helped us achieve ISO 27001 certification months ahead of schedule.",
        name: "Aisha Patel",
        role: "Security Director",
        company: "HealthTech Innovations",
        avatar: Some("https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
    },
    Testimonial {
        id: 4,
        quote: "Junaid delivered an outstanding security awareness training program for our organization. His engaging presentation style and real-world examples resonated with employees at all technical levels, resulting in measurable improvements in our security culture.",
        name: "David Rodriguez",
        role: "IT Manager",
        company: "EducationFirst",
        avatar: Some("https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Github,
        href: "https://github.com/SPECT3R0",
        label: "GitHub",
    },
    SocialLink {
        icon: Icon::Linkedin,
        href: "https://www.linkedin.com/in/junaid-arshad-malik-644b11291/",
        label: "LinkedIn",
    },
    SocialLink {
        icon: Icon::Twitter,
        href: "https://twitter.com/_junaidarshad",
        label: "Twitter",
    },
    SocialLink {
        icon: Icon::Mail,
        href: "mailto:junaidarshad.info@gmail.com",
        label: "Email",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::SECTION_ANCHORS;

    #[test]
    fn nav_items_point_at_sections() {
        for item in NAV_ITEMS.iter().chain(QUICK_LINKS) {
            assert!(SECTION_ANCHORS.contains(&item.anchor), "{}", item.anchor);
        }
        assert_eq!(NAV_ITEMS[6].href(), "#contact");
    }

    #[test]
    fn ids_are_unique() {
        let projects: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(projects.len(), PROJECTS.len());

        let writeups: HashSet<_> = WRITEUPS.iter().map(|w| w.id).collect();
        assert_eq!(writeups.len(), WRITEUPS.len());

        let testimonials: HashSet<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(testimonials.len(), TESTIMONIALS.len());
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(TESTIMONIALS[0].initials(), "SK");
    }
}
