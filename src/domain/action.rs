use super::AppError;

/// Branch targeted by `pull`, `checkout` and `review` when none is given.
pub const DEFAULT_BRANCH: &str = "master";

/// A single grr invocation, resolved from the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Init,
    Fetch { changeset: String },
    Pull { branch: String },
    Checkout { branch: String },
    Review { branch: String },
}

impl Action {
    /// Resolve positional arguments into an action.
    ///
    /// An empty argument list means `review master`. A first token that is not a
    /// known action is taken as the branch to review, so a branch named `pull`
    /// can only be reviewed as `grr review pull`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, AppError> {
        let Some((action, rest)) = args.split_first() else {
            return Ok(Action::Review { branch: DEFAULT_BRANCH.to_string() });
        };
        let action = action.as_ref();

        match action {
            "init" => Ok(Action::Init),
            "fetch" => {
                let changeset = rest.first().ok_or_else(|| AppError::MissingArgument {
                    action: "fetch".into(),
                    argument: "changeset".into(),
                })?;
                Ok(Action::Fetch { changeset: changeset.as_ref().to_string() })
            }
            "pull" => Ok(Action::Pull { branch: optional_branch(action, rest)? }),
            "checkout" => Ok(Action::Checkout { branch: optional_branch(action, rest)? }),
            "review" => Ok(Action::Review { branch: optional_branch(action, rest)? }),
            "" => Ok(Action::Review { branch: DEFAULT_BRANCH.to_string() }),
            branch => Ok(Action::Review { branch: branch.to_string() }),
        }
    }
}

fn optional_branch<S: AsRef<str>>(action: &str, rest: &[S]) -> Result<String, AppError> {
    match rest {
        [] => Ok(DEFAULT_BRANCH.to_string()),
        [branch] => Ok(branch.as_ref().to_string()),
        [_, extra, ..] => Err(AppError::UnexpectedArgument {
            action: action.to_string(),
            argument: extra.as_ref().to_string(),
        }),
    }
}
