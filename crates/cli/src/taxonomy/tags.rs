// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Technology tag dictionary.
//!
//! Synonyms are lowercase substrings. Short forms are not word-bounded:
//! "go" tags "Google" and "java" tags "JavaScript".

use super::TagGroup;

/// Canonical tag name with its surface forms, in match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDef {
    pub name: &'static str,
    pub synonyms: &'static [&'static str],
}

const fn tag(name: &'static str, synonyms: &'static [&'static str]) -> TagDef {
    TagDef { name, synonyms }
}

const LANGUAGES: &[TagDef] = &[
    tag("Python", &["python", "py"]),
    tag("JavaScript", &["javascript", "js"]),
    tag("TypeScript", &["typescript", "ts"]),
    tag("Java", &["java", "jvm"]),
    tag("Go", &["golang", "go"]),
    tag("C++", &["c++", "cpp"]),
    tag("C#", &["c#", "csharp", ".net"]),
    tag("Rust", &["rust", "rustlang"]),
    tag("Ruby", &["ruby", "rails"]),
    tag("PHP", &["php", "laravel"]),
    tag("Scala", &["scala"]),
    tag("Kotlin", &["kotlin"]),
    tag("Swift", &["swift"]),
];

const CLOUD: &[TagDef] = &[
    tag(
        "AWS",
        &[
            "aws",
            "amazon web services",
            "ec2",
            "s3",
            "lambda",
            "dynamodb",
            "eks",
            "ecs",
        ],
    ),
    tag("Azure", &["azure", "microsoft azure", "azure devops"]),
    tag("GCP", &["gcp", "google cloud"]),
    tag("Vercel", &["vercel"]),
    tag("Cloudflare", &["cloudflare", "cloudflare workers"]),
];

const FRAMEWORKS: &[TagDef] = &[
    tag("React", &["react", "reactjs", "react.js"]),
    tag("Next.js", &["next.js", "nextjs", "next js"]),
    tag("Vue", &["vue", "vuejs", "vue.js", "nuxt"]),
    tag("Angular", &["angular", "angularjs"]),
    tag("Svelte", &["svelte", "sveltekit"]),
    tag("FastAPI", &["fastapi", "fast api"]),
    tag("Django", &["django"]),
    tag("Flask", &["flask"]),
    tag("Express", &["express", "expressjs", "express.js"]),
    tag("NestJS", &["nestjs", "nest.js"]),
    tag(".NET", &[".net", "dotnet", "asp.net"]),
    tag("Spring Boot", &["spring boot", "springboot", "spring framework"]),
    tag("Rails", &["ruby on rails", "rails"]),
    tag("Laravel", &["laravel"]),
];

const AI_TOOLS: &[TagDef] = &[
    tag("LangChain", &["langchain", "lang chain"]),
    tag("LangGraph", &["langgraph", "lang graph"]),
    tag("TensorFlow", &["tensorflow", "tf"]),
    tag("PyTorch", &["pytorch", "torch"]),
    tag("Hugging Face", &["hugging face", "huggingface", "transformers"]),
    tag("OpenAI", &["openai", "gpt-4", "gpt-3", "chatgpt"]),
    tag("LlamaIndex", &["llamaindex", "llama index"]),
    tag("Scikit-learn", &["scikit-learn", "sklearn"]),
    tag("Pandas", &["pandas"]),
    tag("NumPy", &["numpy"]),
];

const DATABASES: &[TagDef] = &[
    tag("PostgreSQL", &["postgresql", "postgres", "psql"]),
    tag("MySQL", &["mysql"]),
    tag("MongoDB", &["mongodb", "mongo"]),
    tag("Redis", &["redis"]),
    tag("Elasticsearch", &["elasticsearch", "elastic search", "elk"]),
    tag("DynamoDB", &["dynamodb"]),
    tag("Cassandra", &["cassandra"]),
];

const DEVOPS_TOOLS: &[TagDef] = &[
    tag("Docker", &["docker", "containerization"]),
    tag("Kubernetes", &["kubernetes", "k8s"]),
    tag("Terraform", &["terraform", "iac"]),
    tag("Ansible", &["ansible"]),
    tag("Jenkins", &["jenkins"]),
    tag("GitHub Actions", &["github actions", "gh actions"]),
    tag("GitLab CI", &["gitlab ci", "gitlab-ci"]),
    tag("ArgoCD", &["argocd", "argo cd"]),
    tag("Helm", &["helm", "helm charts"]),
    tag("Prometheus", &["prometheus"]),
    tag("Grafana", &["grafana"]),
    tag("DataDog", &["datadog"]),
];

const OTHER: &[TagDef] = &[
    tag("GraphQL", &["graphql", "graph ql"]),
    tag("REST API", &["rest api", "restful"]),
    tag("gRPC", &["grpc", "g-rpc"]),
    tag("Kafka", &["kafka", "apache kafka"]),
    tag("RabbitMQ", &["rabbitmq", "rabbit mq"]),
    tag("WebSocket", &["websocket", "websockets", "ws"]),
    tag("Microservices", &["microservices", "micro-services"]),
    tag("Serverless", &["serverless", "faas"]),
    tag("Agile", &["agile", "scrum", "kanban"]),
    tag("Git", &["git", "github", "gitlab", "bitbucket"]),
];

pub(super) fn group_tags(group: TagGroup) -> &'static [TagDef] {
    match group {
        TagGroup::Languages => LANGUAGES,
        TagGroup::Cloud => CLOUD,
        TagGroup::Frameworks => FRAMEWORKS,
        TagGroup::AiTools => AI_TOOLS,
        TagGroup::Databases => DATABASES,
        TagGroup::DevopsTools => DEVOPS_TOOLS,
        TagGroup::Other => OTHER,
    }
}
