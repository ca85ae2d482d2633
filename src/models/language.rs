#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Go,
    Cpp,
    Rust,
    Java,
    C,
    Kotlin,
}

impl Language {
    /// Menu order; position + 1 is the number typed at the prompt.
    pub const ALL: [Language; 6] = [
        Language::Go,
        Language::Cpp,
        Language::Rust,
        Language::Java,
        Language::C,
        Language::Kotlin,
    ];

    pub fn from_choice(choice: &str) -> Option<Language> {
        let n: usize = choice.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    pub fn choice(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0) + 1
    }

    /// Label the question bank uses for this language's code snippet.
    pub fn snippet_label(&self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::Cpp => "C++",
            Language::Rust => "Rust",
            Language::Java => "Java",
            Language::C => "C",
            Language::Kotlin => "Kotlin",
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            Language::Go => "golang",
            Language::Cpp => "cpp",
            Language::Rust => "rust",
            Language::Java => "java",
            Language::C => "c",
            Language::Kotlin => "kotlin",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Cpp => "cpp",
            Language::Rust => "rs",
            Language::Java => "java",
            Language::C => "c",
            Language::Kotlin => "kt",
        }
    }
}
