#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }
        let prefix = args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_model_list()
            || cmd.is_model_set()
            || cmd.is_reset()
            || cmd.is_debug()
            || cmd.is_help()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_model_list(&self) -> bool {
        return ["/ml", "/modellist", "/modelist"].contains(&self.command.as_str());
    }

    pub fn is_model_set(&self) -> bool {
        return ["/m", "/model"].contains(&self.command.as_str());
    }

    pub fn is_reset(&self) -> bool {
        return ["/reset", "/clear"].contains(&self.command.as_str());
    }

    pub fn is_debug(&self) -> bool {
        return ["/d", "/debug"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }
}
