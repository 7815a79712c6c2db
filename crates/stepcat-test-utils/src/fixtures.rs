//! Canned definition documents.

/// A minimal valid `CommandLineTool`.
pub const COMMAND_LINE_TOOL: &str = "\
cwlVersion: v1.2
class: CommandLineTool
baseCommand: echo
inputs:
  message:
    type: string
    inputBinding:
      position: 1
outputs: []
";

/// A `CommandLineTool` that already declares its own stream files.
pub const TOOL_WITH_STREAMS: &str = "\
cwlVersion: v1.2
class: CommandLineTool
baseCommand: [bwa, mem]
stdout: old.log
stderr: old.err
inputs: []
outputs: []
";

/// A tool that parses but is not a usable `CommandLineTool`.
pub const TOOL_WITHOUT_COMMAND: &str = "\
cwlVersion: v1.2
class: CommandLineTool
inputs: []
outputs: []
";

/// A small workflow definition file.
pub const WORKFLOW: &str = "\
steps:
  - align:
  - sort:
";
