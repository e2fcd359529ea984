use nanoargs::Args;

fn main() {
    let args = Args::from_env();

    println!("program:    {}", args.program_name());
    println!("positional: {:?}", args.positional());

    let threads = args
        .get_int_or("threads", 1)
        .expect("--threads must be an integer");
    let output = args.get_or("output", "out.txt");

    println!("threads:    {threads}");
    println!("output:     {output}");
    println!("verbose:    {}", args.flag("verbose"));
}
