//! Fixed expert personas and their system prompts.

use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Lawyer,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Teacher, Role::Lawyer];
    pub const DEFAULT: Role = Role::Teacher;

    pub fn id(self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Lawyer => "lawyer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Teacher => "教師",
            Role::Lawyer => "弁護士",
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            Role::Teacher => TEACHER_PROMPT,
            Role::Lawyer => LAWYER_PROMPT,
        }
    }

    /// Resolves a role identifier. Anything unrecognised becomes the teacher.
    pub fn resolve(id: &str) -> Role {
        match id {
            "teacher" => Role::Teacher,
            "lawyer" => Role::Lawyer,
            other => {
                warn!("Unknown role id {:?}, falling back to {}", other, Role::DEFAULT.id());
                Role::DEFAULT
            }
        }
    }
}

const TEACHER_PROMPT: &str = concat!(
    "あなたは生徒にわかりやすく教えるプロの教師です。",
    "専門用語はできるだけ噛み砕き、具体例を交えて、箇条書き中心で簡潔に説明してください。",
);

const LAWYER_PROMPT: &str = concat!(
    "あなたは依頼者に法的助言を行う弁護士です。",
    "まず結論、その後に根拠法や注意点を整理して、誤解のない表現で説明してください。",
    "法的助言で不確実な点があれば、その旨を明記してください。",
);

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(role_id: &str) -> &'static str {
        Role::resolve(role_id).system_prompt()
    }

    #[test]
    fn known_roles_map_to_their_prompts() {
        assert_eq!(prompt("teacher"), TEACHER_PROMPT);
        assert_eq!(prompt("lawyer"), LAWYER_PROMPT);
        assert_ne!(TEACHER_PROMPT, LAWYER_PROMPT);
    }

    #[test]
    fn unknown_roles_fall_back_to_teacher() {
        for id in ["", "doctor", "Lawyer", " teacher", "弁護士", "lawyer\n", "教師"] {
            assert_eq!(prompt(id), TEACHER_PROMPT, "role id {:?}", id);
        }
    }

    #[test]
    fn lookup_is_repeatable() {
        for id in ["teacher", "lawyer", "unknown"] {
            assert_eq!(prompt(id), prompt(id));
        }
    }

    #[test]
    fn every_role_has_a_prompt_and_round_trips_its_id() {
        for role in Role::ALL {
            assert!(!role.system_prompt().trim().is_empty());
            assert!(!role.label().is_empty());
            assert_eq!(Role::resolve(role.id()), role);
        }
    }

    #[test]
    fn lawyer_prompt_asks_for_uncertainty_disclosure() {
        assert!(Role::Lawyer.system_prompt().contains("不確実な点"));
        assert!(Role::Teacher.system_prompt().contains("具体例"));
    }
}
