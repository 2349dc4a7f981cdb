//! Account commands: signup, login, logout and whoami.

use egytravel::{
    forms::{LoginForm, SignupForm},
    session::CurrentUser,
};
use serde::Serialize;

use crate::backend::Workspace;
use crate::cli::{LoginArgs, SignupArgs};
use crate::output::{OutputFormat, print_json};

/// JSON view of the session after an account command.
#[derive(Debug, Serialize)]
struct SessionReport<'a> {
    logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

impl<'a> From<Option<&'a CurrentUser>> for SessionReport<'a> {
    fn from(user: Option<&'a CurrentUser>) -> Self {
        Self {
            logged_in: user.is_some(),
            name: user.and_then(|user| user.name.as_deref()),
            email: user.map(|user| user.email.as_str()),
        }
    }
}

fn report(user: &CurrentUser, verb: &str, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => {
            println!("{verb} as {} <{}>", user.display_name(), user.email);
            Ok(())
        }
        OutputFormat::Json => print_json(&SessionReport::from(Some(user))),
    }
}

/// Run the `signup` command
pub async fn signup(
    workspace: &mut Workspace,
    args: SignupArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = SignupForm {
        name: args.name,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
    };
    form.validate()?;

    let user = workspace
        .site
        .signup(&form.name, &form.email, &form.password)
        .await?;
    workspace.save().await?;

    report(&user, "Signed up", format)?;
    Ok(())
}

/// Run the `login` command
pub async fn login(
    workspace: &mut Workspace,
    args: LoginArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = LoginForm {
        email: args.email,
        password: args.password,
    };
    form.validate()?;

    let user = workspace.site.login(&form.email, &form.password).await?;
    workspace.save().await?;

    report(&user, "Logged in", format)?;
    Ok(())
}

/// Run the `logout` command
pub async fn logout(
    workspace: &mut Workspace,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let was_logged_in = workspace.site.is_logged_in();
    workspace.site.logout().await?;
    workspace.save().await?;

    match format {
        OutputFormat::Human if was_logged_in => println!("Logged out"),
        OutputFormat::Human => println!("Not logged in"),
        OutputFormat::Json => print_json(&SessionReport::from(None))?,
    }
    Ok(())
}

/// Run the `whoami` command
pub fn whoami(workspace: &Workspace, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let user = workspace.site.current_user();
    match format {
        OutputFormat::Human => match user {
            Some(user) => println!("{} <{}>", user.display_name(), user.email),
            None => println!("Not logged in"),
        },
        OutputFormat::Json => print_json(&SessionReport::from(user))?,
    }
    Ok(())
}
