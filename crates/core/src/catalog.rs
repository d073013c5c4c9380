//! The builtin AI-tool catalog.
//!
//! One authoritative reference dataset, supplied to the matcher as a
//! read-only constant. Presentation-only fields (logos, display colors)
//! are a UI concern and deliberately not part of this schema.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Tier};

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

pub const CATEGORY_LANGUAGE_MODELS: &str = "Language Models";
pub const CATEGORY_COMPUTER_VISION: &str = "Computer Vision";
pub const CATEGORY_ML_PLATFORMS: &str = "ML Platforms";
pub const CATEGORY_DATA_PLATFORMS: &str = "Data Platforms";
pub const CATEGORY_DEVELOPMENT_FRAMEWORKS: &str = "Development Frameworks";
pub const CATEGORY_AI_SERVICES: &str = "AI Services";
pub const CATEGORY_OPEN_SOURCE: &str = "Open Source";
pub const CATEGORY_ENTERPRISE_AI: &str = "Enterprise AI";
pub const CATEGORY_MLOPS: &str = "MLOps";
pub const CATEGORY_DATA_TOOLS: &str = "Data Tools";
pub const CATEGORY_GENERATIVE_AI: &str = "Generative AI";

// ---------------------------------------------------------------------------
// Tool entry
// ---------------------------------------------------------------------------

/// One catalog entry. The matcher reads `category`, `capabilities`,
/// `pricing_model`, and `implementation_complexity`; the remaining fields
/// are surfaced to the selection UI as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTool {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub capabilities: Vec<String>,
    pub use_cases: Vec<String>,
    pub pricing_model: String,
    pub implementation_complexity: Tier,
    pub integration_options: Vec<String>,
    pub data_privacy: String,
}

/// Compact record form for the builtin table below.
struct ToolRecord {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    capabilities: &'static [&'static str],
    use_cases: &'static [&'static str],
    pricing_model: &'static str,
    implementation_complexity: Tier,
    integration_options: &'static [&'static str],
    data_privacy: &'static str,
}

impl ToolRecord {
    fn to_tool(&self) -> AiTool {
        AiTool {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            capabilities: self.capabilities.iter().map(|s| s.to_string()).collect(),
            use_cases: self.use_cases.iter().map(|s| s.to_string()).collect(),
            pricing_model: self.pricing_model.to_string(),
            implementation_complexity: self.implementation_complexity,
            integration_options: self
                .integration_options
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data_privacy: self.data_privacy.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Builtin table
// ---------------------------------------------------------------------------

const BUILTIN_TOOLS: &[ToolRecord] = &[
    ToolRecord {
        id: "tool-1",
        name: "OpenAI GPT-4",
        description: "Advanced language model for natural language processing, content generation, and conversational AI",
        category: CATEGORY_LANGUAGE_MODELS,
        capabilities: &["Text Generation", "Summarization", "Translation", "Question Answering"],
        use_cases: &["Customer Support", "Content Creation", "Data Analysis"],
        pricing_model: "Usage-based",
        implementation_complexity: Tier::Medium,
        integration_options: &["API", "SDK"],
        data_privacy: "SOC 2 compliant",
    },
    ToolRecord {
        id: "tool-2",
        name: "Google Vertex AI",
        description: "Unified ML platform for building and deploying ML models and AI applications",
        category: CATEGORY_ML_PLATFORMS,
        capabilities: &["Custom Model Training", "AutoML", "Model Deployment", "MLOps"],
        use_cases: &["Predictive Analytics", "Computer Vision", "NLP"],
        pricing_model: "Usage-based",
        implementation_complexity: Tier::High,
        integration_options: &["API", "SDK", "Console"],
        data_privacy: "GDPR compliant",
    },
    ToolRecord {
        id: "tool-3",
        name: "Microsoft Azure Cognitive Services",
        description: "Suite of AI services and APIs for vision, speech, language, and decision making",
        category: CATEGORY_AI_SERVICES,
        capabilities: &["Computer Vision", "Speech Recognition", "Language Understanding", "Decision Support"],
        use_cases: &["Document Processing", "Speech Interfaces", "Image Analysis"],
        pricing_model: "Tiered",
        implementation_complexity: Tier::Medium,
        integration_options: &["API", "SDK", "No-code"],
        data_privacy: "ISO 27001 certified",
    },
    ToolRecord {
        id: "tool-4",
        name: "Hugging Face Transformers",
        description: "Open-source library providing thousands of pre-trained models for NLP, vision, and audio",
        category: CATEGORY_OPEN_SOURCE,
        capabilities: &["Text Classification", "Named Entity Recognition", "Translation", "Summarization"],
        use_cases: &["Research", "Prototyping", "Custom NLP Solutions"],
        pricing_model: "Free (Open Source)",
        implementation_complexity: Tier::Medium,
        integration_options: &["Python Library", "API"],
        data_privacy: "Self-hosted option available",
    },
    ToolRecord {
        id: "tool-5",
        name: "IBM Watson",
        description: "Enterprise AI platform with pre-built applications and tools for building AI solutions",
        category: CATEGORY_ENTERPRISE_AI,
        capabilities: &["Natural Language Understanding", "Speech to Text", "Text to Speech", "Visual Recognition"],
        use_cases: &["Enterprise Search", "Customer Service", "Risk Management"],
        pricing_model: "Subscription",
        implementation_complexity: Tier::High,
        integration_options: &["API", "SDK", "Cloud"],
        data_privacy: "HIPAA compliant",
    },
    ToolRecord {
        id: "tool-6",
        name: "TensorFlow",
        description: "Open-source machine learning framework for building and deploying ML models",
        category: CATEGORY_OPEN_SOURCE,
        capabilities: &["Deep Learning", "Neural Networks", "Model Training", "Deployment"],
        use_cases: &["Computer Vision", "NLP", "Predictive Analytics"],
        pricing_model: "Free (Open Source)",
        implementation_complexity: Tier::High,
        integration_options: &["Python Library", "JavaScript", "Mobile"],
        data_privacy: "Self-hosted option available",
    },
    ToolRecord {
        id: "tool-7",
        name: "Amazon SageMaker",
        description: "Fully managed service to build, train, and deploy machine learning models",
        category: CATEGORY_ML_PLATFORMS,
        capabilities: &["Model Training", "Automated ML", "Model Deployment", "MLOps"],
        use_cases: &["Fraud Detection", "Demand Forecasting", "Recommendation Systems"],
        pricing_model: "Usage-based",
        implementation_complexity: Tier::High,
        integration_options: &["API", "SDK", "Console"],
        data_privacy: "AWS compliance programs",
    },
    ToolRecord {
        id: "tool-8",
        name: "Anthropic Claude",
        description: "AI assistant focused on helpfulness, harmlessness, and honesty",
        category: CATEGORY_LANGUAGE_MODELS,
        capabilities: &["Text Generation", "Summarization", "Question Answering", "Content Moderation"],
        use_cases: &["Customer Support", "Content Creation", "Research"],
        pricing_model: "Usage-based",
        implementation_complexity: Tier::Medium,
        integration_options: &["API"],
        data_privacy: "SOC 2 compliant",
    },
    ToolRecord {
        id: "tool-9",
        name: "Databricks",
        description: "Unified analytics platform for big data processing and machine learning",
        category: CATEGORY_DATA_PLATFORMS,
        capabilities: &["Data Processing", "ML Workflows", "Collaborative Notebooks", "Model Serving"],
        use_cases: &["Data Engineering", "Data Science", "Business Analytics"],
        pricing_model: "Subscription",
        implementation_complexity: Tier::High,
        integration_options: &["API", "SDK", "Console"],
        data_privacy: "GDPR compliant",
    },
    ToolRecord {
        id: "tool-10",
        name: "Dataiku",
        description: "End-to-end data science and machine learning platform",
        category: CATEGORY_DATA_PLATFORMS,
        capabilities: &["Data Preparation", "Visual ML", "Model Deployment", "Collaboration"],
        use_cases: &["Business Intelligence", "Risk Analysis", "Customer Intelligence"],
        pricing_model: "Subscription",
        implementation_complexity: Tier::Medium,
        integration_options: &["API", "SDK", "No-code"],
        data_privacy: "SOC 2 compliant",
    },
    ToolRecord {
        id: "tool-11",
        name: "Snowflake",
        description: "Cloud data platform with AI and ML capabilities",
        category: CATEGORY_DATA_PLATFORMS,
        capabilities: &["Data Warehousing", "Data Sharing", "Data Engineering", "ML Integration"],
        use_cases: &["Data Analytics", "Business Intelligence", "Data Sharing"],
        pricing_model: "Usage-based",
        implementation_complexity: Tier::Medium,
        integration_options: &["API", "SDK", "Console"],
        data_privacy: "HIPAA compliant",
    },
    ToolRecord {
        id: "tool-12",
        name: "Labelbox",
        description: "Data labeling platform for machine learning",
        category: CATEGORY_DATA_TOOLS,
        capabilities: &["Data Labeling", "Model Training Data", "Annotation", "Quality Management"],
        use_cases: &["Computer Vision", "NLP", "Data Preparation"],
        pricing_model: "Subscription",
        implementation_complexity: Tier::Low,
        integration_options: &["API", "SDK", "Web Interface"],
        data_privacy: "SOC 2 compliant",
    },
    ToolRecord {
        id: "tool-13",
        name: "Weights & Biases",
        description: "MLOps platform for experiment tracking, model management, and collaboration",
        category: CATEGORY_MLOPS,
        capabilities: &["Experiment Tracking", "Model Management", "Collaboration", "Visualization"],
        use_cases: &["ML Research", "Model Development", "Team Collaboration"],
        pricing_model: "Freemium",
        implementation_complexity: Tier::Low,
        integration_options: &["API", "SDK", "Python Library"],
        data_privacy: "SOC 2 compliant",
    },
    ToolRecord {
        id: "tool-14",
        name: "Roboflow",
        description: "Computer vision platform for image and video annotation, model training, and deployment",
        category: CATEGORY_COMPUTER_VISION,
        capabilities: &["Image Annotation", "Model Training", "Model Deployment", "Data Augmentation"],
        use_cases: &["Object Detection", "Image Classification", "Segmentation"],
        pricing_model: "Freemium",
        implementation_complexity: Tier::Medium,
        integration_options: &["API", "SDK", "Web Interface"],
        data_privacy: "GDPR compliant",
    },
    ToolRecord {
        id: "tool-15",
        name: "Pinecone",
        description: "Vector database for similarity search and AI applications",
        category: CATEGORY_DATA_TOOLS,
        capabilities: &["Vector Search", "Semantic Search", "Recommendation Systems", "Anomaly Detection"],
        use_cases: &["Similarity Search", "Recommendation Engines", "Content Discovery"],
        pricing_model: "Usage-based",
        implementation_complexity: Tier::Medium,
        integration_options: &["API", "SDK"],
        data_privacy: "SOC 2 compliant",
    },
    ToolRecord {
        id: "tool-16",
        name: "Langchain",
        description: "Framework for developing applications powered by language models",
        category: CATEGORY_DEVELOPMENT_FRAMEWORKS,
        capabilities: &["LLM Integration", "Prompt Management", "Chain of Thought", "Agent Development"],
        use_cases: &["Chatbots", "Document Processing", "Knowledge Management"],
        pricing_model: "Free (Open Source)",
        implementation_complexity: Tier::Medium,
        integration_options: &["Python Library", "JavaScript Library"],
        data_privacy: "Self-hosted option available",
    },
    ToolRecord {
        id: "tool-17",
        name: "Streamlit",
        description: "Open-source app framework for Machine Learning and Data Science",
        category: CATEGORY_DEVELOPMENT_FRAMEWORKS,
        capabilities: &["Data Visualization", "Interactive Apps", "Model Deployment", "Prototyping"],
        use_cases: &["Data Apps", "ML Demos", "Internal Tools"],
        pricing_model: "Free (Open Source)",
        implementation_complexity: Tier::Low,
        integration_options: &["Python Library", "Cloud Deployment"],
        data_privacy: "Self-hosted option available",
    },
    ToolRecord {
        id: "tool-18",
        name: "Gradio",
        description: "Open-source Python library for creating customizable UI components for ML models",
        category: CATEGORY_DEVELOPMENT_FRAMEWORKS,
        capabilities: &["UI Components", "Model Demos", "API Generation", "Sharing"],
        use_cases: &["Model Demos", "Prototyping", "User Testing"],
        pricing_model: "Free (Open Source)",
        implementation_complexity: Tier::Low,
        integration_options: &["Python Library", "Cloud Deployment"],
        data_privacy: "Self-hosted option available",
    },
    ToolRecord {
        id: "tool-19",
        name: "Cohere",
        description: "Platform for building with language AI, offering embeddings and language models",
        category: CATEGORY_LANGUAGE_MODELS,
        capabilities: &["Text Generation", "Text Embeddings", "Semantic Search", "Classification"],
        use_cases: &["Content Generation", "Search Enhancement", "Customer Support"],
        pricing_model: "Usage-based",
        implementation_complexity: Tier::Medium,
        integration_options: &["API", "SDK"],
        data_privacy: "SOC 2 compliant",
    },
    ToolRecord {
        id: "tool-20",
        name: "Stability AI",
        description: "Open AI systems focusing on image, language, audio, video, and 3D generation",
        category: CATEGORY_GENERATIVE_AI,
        capabilities: &["Image Generation", "Text-to-Image", "Image Editing", "Style Transfer"],
        use_cases: &["Creative Content", "Design", "Marketing"],
        pricing_model: "Usage-based",
        implementation_complexity: Tier::Medium,
        integration_options: &["API", "SDK"],
        data_privacy: "GDPR compliant",
    },
];

/// Materialize the builtin catalog, in its canonical order.
///
/// The order is significant: matcher ties are broken by catalog position.
pub fn builtin_catalog() -> Vec<AiTool> {
    BUILTIN_TOOLS.iter().map(ToolRecord::to_tool).collect()
}

/// Look up a tool by id.
pub fn find_tool<'a>(catalog: &'a [AiTool], id: &str) -> Option<&'a AiTool> {
    catalog.iter().find(|tool| tool.id == id)
}
