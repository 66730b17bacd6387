// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Category keyword lists.
//!
//! Keywords are lowercase plain substrings. Lists hold distinct entries:
//! the score counts distinct keywords found, never occurrences.

use super::Category;

const FRONTEND_TITLE: &[&str] = &[
    "frontend",
    "front-end",
    "front end",
    "ui developer",
    "ui engineer",
    "react developer",
    "vue developer",
    "angular developer",
    "web developer",
    "javascript developer",
    "typescript developer",
];

const FRONTEND_DESCRIPTION: &[&str] = &[
    "frontend",
    "front-end",
    "user interface",
    "ui/ux",
    "responsive design",
    "css",
    "html",
    "dom",
    "browser",
];

const BACKEND_TITLE: &[&str] = &[
    "backend",
    "back-end",
    "back end",
    "server-side",
    "api developer",
    "python developer",
    "java developer",
    "golang developer",
    "go developer",
    "node developer",
    "nodejs developer",
    ".net developer",
    "c# developer",
];

const BACKEND_DESCRIPTION: &[&str] = &[
    "backend",
    "back-end",
    "server-side",
    "api",
    "microservices",
    "database",
    "sql",
    "rest api",
    "graphql",
];

const FULLSTACK_TITLE: &[&str] = &[
    "fullstack",
    "full-stack",
    "full stack",
    "software engineer",
    "software developer",
    "web developer",
];

const FULLSTACK_DESCRIPTION: &[&str] = &[
    "fullstack",
    "full-stack",
    "full stack",
    "end-to-end",
    "frontend and backend",
    "front-end and back-end",
];

const DEVOPS_TITLE: &[&str] = &[
    "devops",
    "sre",
    "site reliability",
    "platform engineer",
    "infrastructure engineer",
    "cloud engineer",
    "systems engineer",
    "devsecops",
    "mlops",
    "dataops",
];

const DEVOPS_DESCRIPTION: &[&str] = &[
    "devops",
    "ci/cd",
    "continuous integration",
    "continuous deployment",
    "infrastructure as code",
    "terraform",
    "ansible",
    "kubernetes",
    "docker",
    "containerization",
    "orchestration",
    "monitoring",
];

const AI_TITLE: &[&str] = &[
    "ai engineer",
    "ml engineer",
    "machine learning",
    "data scientist",
    "deep learning",
    "nlp engineer",
    "computer vision",
    "llm engineer",
    "ai/ml",
    "artificial intelligence",
    "generative ai",
    "genai",
];

const AI_DESCRIPTION: &[&str] = &[
    "machine learning",
    "deep learning",
    "neural network",
    "tensorflow",
    "pytorch",
    "nlp",
    "natural language processing",
    "computer vision",
    "llm",
    "large language model",
    "generative ai",
    "transformers",
    "hugging face",
    "openai",
    "langchain",
    "langgraph",
    "rag",
    "retrieval augmented",
    "fine-tuning",
    "model training",
];

pub(super) fn title_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Frontend => FRONTEND_TITLE,
        Category::Backend => BACKEND_TITLE,
        Category::Fullstack => FULLSTACK_TITLE,
        Category::DevOps => DEVOPS_TITLE,
        Category::AI => AI_TITLE,
    }
}

pub(super) fn description_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Frontend => FRONTEND_DESCRIPTION,
        Category::Backend => BACKEND_DESCRIPTION,
        Category::Fullstack => FULLSTACK_DESCRIPTION,
        Category::DevOps => DEVOPS_DESCRIPTION,
        Category::AI => AI_DESCRIPTION,
    }
}
