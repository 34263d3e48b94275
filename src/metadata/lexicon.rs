// Word lists backing the person-name heuristics
use once_cell::sync::Lazy;
use std::collections::HashSet;

// Given names across a few naming traditions; a leading one is name evidence
const GIVEN_NAMES: &[&str] = &[
    "aaron", "ada", "adam", "ahmed", "akira", "alan", "albert", "alex", "alexander", "alexis",
    "ali", "alice", "amanda", "amber", "amit", "amy", "ana", "andrea", "andrew", "angela",
    "anil", "ann", "anna", "anthony", "arjun", "arthur", "ashley", "austin", "barbara",
    "benjamin", "betty", "beverly", "bob", "brandon", "brenda", "brian", "bruce", "bryan",
    "carl", "carlos", "carol", "carolyn", "catherine", "charles", "charlotte", "cheryl",
    "christian", "christina", "christine", "christopher", "claire", "cynthia", "daniel",
    "danielle", "david", "deborah", "deepak", "denise", "dennis", "diana", "diane", "dmitri",
    "donald", "donna", "doris", "dorothy", "douglas", "dylan", "edward", "elena", "elijah",
    "elizabeth", "emily", "emma", "eric", "ethan", "eugene", "evelyn", "fatima", "frances",
    "frank", "gabriel", "gary", "george", "gerald", "gloria", "grace", "gregory", "hannah",
    "hans", "harold", "haruto", "hassan", "heather", "helen", "henry", "hiroshi", "hui",
    "ingrid", "isabella", "ivan", "jack", "jacob", "jacqueline", "james", "jane", "janet",
    "janice", "jason", "javier", "jean", "jeffrey", "jennifer", "jeremy", "jerry", "jesse",
    "jessica", "jian", "jing", "joan", "joe", "john", "johnny", "jonathan", "jordan", "jose",
    "joseph", "joshua", "joyce", "juan", "judith", "judy", "julia", "julie", "justin", "kai",
    "karen", "katherine", "kathleen", "kathryn", "kayla", "keith", "kelly", "kenji",
    "kenneth", "kevin", "kimberly", "klaus", "kyle", "lars", "laura", "lauren", "lawrence",
    "lei", "linda", "lisa", "logan", "louis", "lucia", "luis", "madison", "margaret", "maria",
    "marie", "marilyn", "mark", "martha", "mary", "matthew", "megan", "melissa", "michael",
    "michelle", "miguel", "ming", "mohammed", "nancy", "natalie", "natasha", "nathan",
    "nicholas", "nicole", "noah", "olga", "olivia", "omar", "pablo", "pamela", "patricia",
    "patrick", "paul", "peter", "philip", "pierre", "priya", "rachel", "rahul", "raj", "ralph",
    "ravi", "raymond", "rebecca", "richard", "robert", "roger", "ronald", "rose", "roy",
    "russell", "ruth", "ryan", "sakura", "samantha", "samuel", "sandra", "sara", "sarah",
    "scott", "sean", "sergei", "sharon", "shirley", "sofia", "sophia", "stephanie", "stephen",
    "steven", "sunil", "susan", "sven", "takashi", "tao", "teresa", "theresa", "thomas",
    "timothy", "tyler", "victoria", "vikram", "vincent", "virginia", "walter", "wayne", "wei",
    "william", "xin", "yan", "yuki", "zachary",
];

// Capitalized in titles, headlines and job lines; rarely a name on their own
const COMMON_WORDS: &[&str] = &[
    // research titles
    "adaptive", "adversarial", "algorithm", "algorithms", "analysis", "applied", "approach",
    "approaches", "artificial", "attention", "automatic", "bayesian", "benchmark", "brain",
    "classification", "clustering", "cognitive", "computation", "computational", "computer",
    "computing", "control", "convolutional", "data", "dataset", "deep", "design", "detection",
    "distributed", "dynamic", "dynamics", "efficient", "embedding", "embeddings",
    "estimation", "evaluation", "experiments", "fast", "framework", "generative", "graph",
    "graphs", "image", "images", "improved", "inference", "information", "intelligence",
    "introduction", "language", "large", "learning", "linear", "machine", "method", "methods",
    "model", "models", "modeling", "modelling", "multi", "natural", "network", "networks",
    "neural", "nonlinear", "novel", "object", "optimization", "parallel", "prediction",
    "probabilistic", "processing", "quantum", "recognition", "recurrent", "reinforcement",
    "representation", "representations", "research", "residual", "results", "retrieval",
    "robust", "scalable", "scale", "search", "segmentation", "semantic", "signal", "simple",
    "speech", "statistical", "study", "supervised", "survey", "systems", "text", "theory",
    "training", "transfer", "transformer", "transformers", "understanding", "unsupervised",
    "vision", "visual",
    // organisations and places
    "academy", "center", "centre", "faculty", "global", "holdings", "international", "lab",
    "national", "partners", "science", "sciences", "solutions", "technologies", "technology",
    "engineering", "mathematics", "physics", "biology", "chemistry", "medicine", "medical",
    "health", "hospital", "bank", "city", "state", "north", "south", "east", "west",
    // resume headlines
    "administrator", "analyst", "architect", "assistant", "associate", "backend", "business",
    "chief", "cloud", "consultant", "coordinator", "customer", "designer", "developer",
    "development", "director", "engineer", "executive", "finance", "financial", "frontend",
    "full", "head", "hardware", "intern", "junior", "lead", "manager", "management",
    "marketing", "mobile", "officer", "operations", "president", "principal", "product",
    "program", "project", "quality", "sales", "scientist", "security", "senior", "service",
    "services", "software", "specialist", "stack", "staff", "support", "team", "technical",
    "vice", "web", "achievements", "awards", "career", "competencies", "employment", "history",
    "highlights", "personal", "qualifications", "volunteer", "leadership",
    // invoices
    "billing", "client", "customer", "discount", "grand", "hours", "item", "items", "notes",
    "number", "order", "payable", "price", "purchase", "quantity", "rate", "remit",
    "shipping", "supplies", "terms", "thank", "unit", "widget", "widgets",
];

// Capitalized words that are never part of a name
const NON_NAMES: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday", "abstract", "conclusion", "conclusions", "references",
    "acknowledgements", "appendix", "section", "chapter", "figure", "table", "page", "invoice",
    "receipt", "total", "subtotal", "amount", "balance", "payment", "date", "tax", "vat", "qty",
    "description", "resume", "curriculum", "vitae", "experience", "education", "skills",
    "summary", "objective", "profile", "contact", "email", "phone", "tel", "mobile", "address",
    "street", "avenue", "road", "suite", "department", "school", "professional", "work",
    "projects", "languages", "certifications", "publications", "interests", "proceedings",
    "journal", "conference", "vol", "volume", "keywords", "index", "united", "states",
    "america", "europe", "new", "pdf", "usa", "uk",
];

static GIVEN: Lazy<HashSet<&'static str>> = Lazy::new(|| GIVEN_NAMES.iter().copied().collect());
static COMMON: Lazy<HashSet<&'static str>> = Lazy::new(|| COMMON_WORDS.iter().copied().collect());
static BLOCKED: Lazy<HashSet<&'static str>> = Lazy::new(|| NON_NAMES.iter().copied().collect());

/// All lookups take an already lowercased word.
pub fn is_given_name(word: &str) -> bool {
    GIVEN.contains(word)
}

pub fn is_common_word(word: &str) -> bool {
    COMMON.contains(word)
}

pub fn is_non_name(word: &str) -> bool {
    BLOCKED.contains(word)
}
